use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::{debug, info};

use crate::error::{CatalogoError, CatalogoResult};
use crate::excel::io::{celda_a_numero, celda_a_texto, fila_vacia, normalizar_encabezado};
use crate::models::FilaPrograma;

// Encabezados del export de Programas del SNIES (tras recortar espacios)
pub const COL_CODIGO_INSTITUCION: &str = "CÓDIGO_INSTITUCIÓN";
pub const COL_NOMBRE_INSTITUCION: &str = "NOMBRE_INSTITUCIÓN";
pub const COL_SECTOR: &str = "SECTOR";
pub const COL_DEPARTAMENTO: &str = "DEPARTAMENTO_OFERTA_PROGRAMA";
pub const COL_MUNICIPIO: &str = "MUNICIPIO_OFERTA_PROGRAMA";
pub const COL_NOMBRE_PROGRAMA: &str = "NOMBRE_DEL_PROGRAMA";
pub const COL_CODIGO_PROGRAMA: &str = "CÓDIGO_SNIES_DEL_PROGRAMA";
pub const COL_NIVEL: &str = "NIVEL_DE_FORMACIÓN";
pub const COL_MODALIDAD: &str = "MODALIDAD";
pub const COL_AREA: &str = "ÁREA_DE_CONOCIMIENTO";
pub const COL_PERIODOS: &str = "NÚMERO_PERIODOS_DE_DURACIÓN";
pub const COL_PERIODICIDAD: &str = "PERIODICIDAD";
pub const COL_COSTO: &str = "COSTO_MATRÍCULA_ESTUD_NUEVOS";

/// Posición de cada columna dentro de la fila de encabezados.
#[derive(Debug, Clone)]
struct IndiceColumnas {
    codigo_institucion: usize,
    nombre_institucion: usize,
    sector: usize,
    departamento: usize,
    municipio: usize,
    nombre_programa: usize,
    codigo_programa: usize,
    nivel: usize,
    modalidad: usize,
    area: usize,
    periodos: usize,
    costo: usize,
    // opcional: algunos exports no la traen
    periodicidad: Option<usize>,
}

impl IndiceColumnas {
    fn desde_encabezados(encabezados: &[String]) -> CatalogoResult<Self> {
        let buscar = |nombre: &str| encabezados.iter().position(|h| h == nombre);
        let requerida = |nombre: &str| buscar(nombre).ok_or_else(|| CatalogoError::ColumnaFaltante(nombre.to_string()));

        Ok(IndiceColumnas {
            codigo_institucion: requerida(COL_CODIGO_INSTITUCION)?,
            nombre_institucion: requerida(COL_NOMBRE_INSTITUCION)?,
            sector: requerida(COL_SECTOR)?,
            departamento: requerida(COL_DEPARTAMENTO)?,
            municipio: requerida(COL_MUNICIPIO)?,
            nombre_programa: requerida(COL_NOMBRE_PROGRAMA)?,
            codigo_programa: requerida(COL_CODIGO_PROGRAMA)?,
            nivel: requerida(COL_NIVEL)?,
            modalidad: requerida(COL_MODALIDAD)?,
            area: requerida(COL_AREA)?,
            periodos: requerida(COL_PERIODOS)?,
            costo: requerida(COL_COSTO)?,
            periodicidad: buscar(COL_PERIODICIDAD),
        })
    }
}

/// Convierte las filas de una hoja (la primera es el encabezado) en `FilaPrograma`.
/// Las filas completamente vacías se omiten; no hay validación de esquema más
/// allá de exigir las columnas.
pub fn parsear_filas<'a, I>(mut filas: I) -> CatalogoResult<Vec<FilaPrograma>>
where
    I: Iterator<Item = &'a [Data]>,
{
    let encabezados: Vec<String> = match filas.next() {
        Some(h) => h.iter().map(normalizar_encabezado).collect(),
        None => Vec::new(),
    };
    let idx = IndiceColumnas::desde_encabezados(&encabezados)?;
    debug!("columnas resueltas: {:?}", idx);

    let mut out = Vec::new();
    for fila in filas {
        if fila_vacia(fila) {
            continue;
        }
        let texto = |i: usize| celda_a_texto(fila.get(i).unwrap_or(&Data::Empty));
        let numero = |i: usize| celda_a_numero(fila.get(i).unwrap_or(&Data::Empty));

        out.push(FilaPrograma {
            codigo_institucion: texto(idx.codigo_institucion),
            nombre_institucion: texto(idx.nombre_institucion),
            sector: texto(idx.sector),
            departamento: texto(idx.departamento),
            municipio: texto(idx.municipio),
            nombre_programa: texto(idx.nombre_programa),
            codigo_programa: texto(idx.codigo_programa),
            nivel_formacion: texto(idx.nivel),
            modalidad: texto(idx.modalidad),
            area_conocimiento: texto(idx.area),
            numero_periodos: numero(idx.periodos),
            periodicidad: idx.periodicidad.map(texto).unwrap_or_default(),
            costo_matricula: numero(idx.costo),
        });
    }
    Ok(out)
}

/// Lee el export de programas. Usa la hoja `hoja` si se indica, si no la primera.
pub fn leer_programas_excel(ruta: &Path, hoja: Option<&str>) -> CatalogoResult<Vec<FilaPrograma>> {
    if !ruta.exists() {
        return Err(CatalogoError::ArchivoNoEncontrado(ruta.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(ruta)?;
    let sheet_names = workbook.sheet_names().to_owned();

    let hoja_a_usar = match hoja {
        Some(nombre) => sheet_names
            .iter()
            .find(|s| s.as_str() == nombre)
            .cloned()
            .ok_or_else(|| CatalogoError::HojaNoEncontrada(nombre.to_string()))?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| CatalogoError::LibroVacio(ruta.to_path_buf()))?,
    };
    info!("leyendo hoja '{}' de {}", hoja_a_usar, ruta.display());

    let range = workbook.worksheet_range(&hoja_a_usar)?;
    let filas = parsear_filas(range.rows())?;
    info!("{} filas de programas leídas", filas.len());
    Ok(filas)
}
