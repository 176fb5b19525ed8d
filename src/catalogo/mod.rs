//! Agrupación de filas por institución y armado del catálogo.
//!
//! Flujo:
//! 1. `agrupar_por_institucion`: particiona por código, orden de primera aparición
//! 2. por grupo: nombre/sector de la primera fila, ciudad/departamento por moda
//! 3. `construir_programas`: programas en orden de fila, sin títulos vacíos ni ids repetidos

pub mod agrupar;
pub mod programas;

pub use agrupar::{agrupar_por_institucion, moda, GrupoInstitucion};
pub use programas::{construir_programas, id_programa, programa_desde_fila};

use tracing::debug;

use crate::models::{FilaPrograma, Institucion};
use crate::normalizacion::{es_vacio_o_nan, slugify, tipo_institucion};

/// Portal de consultas del SNIES; se usa como sitio web de todas las instituciones.
pub const SITIO_WEB_RESPALDO: &str = "https://snies.mineducacion.gov.co/portal/consultas/";

/// Valor para ciudad/departamento cuando no hay dato.
pub const SIN_DATO: &str = "N/A";

/// Resultado de armar el catálogo: las instituciones más los conteos de
/// filas descartadas, sólo informativos.
#[derive(Debug, Default)]
pub struct Catalogo {
    pub instituciones: Vec<Institucion>,
    pub filas_sin_titulo: usize,
    pub programas_duplicados: usize,
}

impl Catalogo {
    pub fn total_programas(&self) -> usize {
        self.instituciones.iter().map(|i| i.programas.len()).sum()
    }
}

/// Id de institución: slug de `nombre-codigo`, o `ies-{codigo}` si queda vacío.
pub fn id_institucion(nombre: &str, codigo: &str) -> String {
    let id = slugify(&format!("{}-{}", nombre, codigo));
    if id.is_empty() { format!("ies-{}", codigo) } else { id }
}

// Vacío y "nan" cuentan como un mismo valor ausente en la moda.
fn moda_o_sin_dato<'a, I>(valores: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let valores = valores.into_iter().map(|v| if es_vacio_o_nan(v) { "" } else { v });
    match moda(valores) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => SIN_DATO.to_string(),
    }
}

/// Arma el registro de una institución a partir de su grupo de filas.
/// Devuelve además (filas sin título, duplicados) del grupo.
pub fn construir_institucion(grupo: &GrupoInstitucion<'_>, sitio_web: &str) -> (Institucion, usize, usize) {
    // nombre y sector se asumen constantes por institución: se toma la primera fila
    let (nombre, sector) = grupo
        .filas
        .first()
        .map(|f| (f.nombre_institucion.trim().to_string(), f.sector.as_str()))
        .unwrap_or_default();

    let departamento = moda_o_sin_dato(grupo.filas.iter().map(|f| f.departamento.trim()));
    let ciudad = moda_o_sin_dato(grupo.filas.iter().map(|f| f.municipio.trim()));

    let programas = construir_programas(&grupo.codigo, &grupo.filas);

    let institucion = Institucion {
        id: id_institucion(&nombre, &grupo.codigo),
        codigo_institucion: Some(grupo.codigo.clone()),
        nombre,
        tipo: tipo_institucion(sector),
        ciudad,
        departamento,
        website: sitio_web.to_string(),
        logo: String::new(),
        programas: programas.programas,
        resenas: Vec::new(),
    };
    (institucion, programas.filas_sin_titulo, programas.duplicados)
}

/// Construye el catálogo completo a partir de las filas normalizadas.
pub fn construir_catalogo(filas: &[FilaPrograma], sitio_web: &str) -> Catalogo {
    let grupos = agrupar_por_institucion(filas);
    debug!("{} grupos de institución", grupos.len());

    let mut catalogo = Catalogo::default();
    for grupo in &grupos {
        let (institucion, sin_titulo, duplicados) = construir_institucion(grupo, sitio_web);
        catalogo.filas_sin_titulo += sin_titulo;
        catalogo.programas_duplicados += duplicados;
        catalogo.instituciones.push(institucion);
    }
    catalogo
}
