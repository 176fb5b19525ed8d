use std::collections::HashSet;

use crate::models::{FilaPrograma, Programa};
use crate::normalizacion::{
    duracion_meses, es_vacio_o_nan, limpiar_codigo, mapear_modalidad, mapear_nivel, slugify, texto_o,
};

/// Área asignada cuando el export no trae área de conocimiento.
pub const AREA_POR_DEFECTO: &str = "Otros";

/// Programas de una institución más los descartes de la construcción.
#[derive(Debug, Default)]
pub struct ProgramasInstitucion {
    pub programas: Vec<Programa>,
    pub filas_sin_titulo: usize,
    pub duplicados: usize,
}

/// Id compuesto del programa: slug de `codigo-snies-titulo`, o de
/// `codigo-titulo` si el primero queda vacío.
pub fn id_programa(codigo_institucion: &str, codigo_programa: &str, titulo: &str) -> String {
    let id = slugify(&format!("{}-{}-{}", codigo_institucion, codigo_programa, titulo));
    if id.is_empty() {
        slugify(&format!("{}-{}", codigo_institucion, titulo))
    } else {
        id
    }
}

/// Matrícula anual: parte entera del costo, 0 si no viene.
pub fn matricula_anual(costo: Option<f64>) -> i64 {
    costo.map(|c| c.trunc() as i64).unwrap_or(0)
}

/// Construye un `Programa` a partir de una fila, sin validar duplicados.
/// `None` si la fila no tiene título.
pub fn programa_desde_fila(codigo_institucion: &str, fila: &FilaPrograma) -> Option<Programa> {
    let titulo = fila.nombre_programa.trim();
    if es_vacio_o_nan(titulo) {
        return None;
    }
    let codigo_programa = limpiar_codigo(&fila.codigo_programa);

    Some(Programa {
        id: id_programa(codigo_institucion, &codigo_programa, titulo),
        titulo: titulo.to_string(),
        nivel: mapear_nivel(&fila.nivel_formacion),
        area: texto_o(&fila.area_conocimiento, AREA_POR_DEFECTO),
        duracion_meses: duracion_meses(fila.numero_periodos, &fila.periodicidad),
        modalidad: mapear_modalidad(&fila.modalidad),
        matricula_cop_anual: matricula_anual(fila.costo_matricula),
        requisitos: Vec::new(),
    })
}

/// Recorre las filas en orden y arma la lista de programas. Si un id ya se
/// vio en esta institución la fila se descarta completa: gana la primera.
pub fn construir_programas(codigo_institucion: &str, filas: &[&FilaPrograma]) -> ProgramasInstitucion {
    let mut res = ProgramasInstitucion::default();
    let mut vistos: HashSet<String> = HashSet::new();

    for fila in filas {
        let Some(programa) = programa_desde_fila(codigo_institucion, fila) else {
            res.filas_sin_titulo += 1;
            continue;
        };
        if !vistos.insert(programa.id.clone()) {
            res.duplicados += 1;
            continue;
        }
        res.programas.push(programa);
    }
    res
}
