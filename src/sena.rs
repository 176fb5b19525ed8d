//! Integración opcional de la oferta SENA en el catálogo.
//!
//! El SENA no está en el export del SNIES: su oferta llega como un listado
//! JSON (`programId`, `title`, `modality`) y se agrega como una institución
//! más. Con SENA integrado el catálogo se ordena por nombre.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::catalogo::programas::AREA_POR_DEFECTO;
use crate::error::{CatalogoError, CatalogoResult};
use crate::models::{Institucion, Modalidad, NivelFormacion, Programa, Resena, TipoInstitucion};
use crate::normalizacion::slugify;

/// Id fijo de la institución SENA dentro del catálogo.
pub const ID_SENA: &str = "sena";

/// Duración asumida para toda la oferta SENA.
pub const DURACION_SENA_MESES: i64 = 12;

const REQUISITO_SENA: &str = "Inscripción SENA / convocatoria vigente";

/// Áreas por palabra clave en el título, en orden de prioridad.
const MARCADORES_AREA: &[(&[&str], &str)] = &[
    (&["salud", "enfer", "medic"], "Salud"),
    (&["software", "sistemas", "datos", "program"], "Ingeniería y Tecnología"),
    (&["negocio", "admin", "contab", "finan"], "Negocios"),
    (&["cocina", "gastr", "arte"], "Artes y Humanidades"),
    (&["educ"], "Educación"),
    (&["derech", "jur"], "Derecho"),
];

/// Un programa del listado SENA.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProgramaSena {
    #[serde(rename = "programId", default)]
    pub id_programa: String,
    #[serde(rename = "title", default)]
    pub titulo: String,
    /// Código de una letra: V, P o H.
    #[serde(rename = "modality", default)]
    pub modalidad: String,
}

/// Lee el listado SENA. El archivo debe existir y ser un arreglo JSON.
pub fn leer_programas_sena(ruta: &Path) -> CatalogoResult<Vec<ProgramaSena>> {
    if !ruta.exists() {
        return Err(CatalogoError::ArchivoNoEncontrado(ruta.to_path_buf()));
    }
    let contenido = fs::read_to_string(ruta)?;
    let programas: Vec<ProgramaSena> = serde_json::from_str(&contenido).map_err(|source| {
        CatalogoError::JsonInvalido {
            ruta: ruta.to_path_buf(),
            source,
        }
    })?;
    info!("{} programas SENA leídos de {}", programas.len(), ruta.display());
    Ok(programas)
}

pub fn modalidad_desde_codigo(codigo: &str) -> Modalidad {
    match codigo.trim().to_uppercase().as_str() {
        "V" => Modalidad::Virtual,
        "H" => Modalidad::Hibrida,
        _ => Modalidad::Presencial,
    }
}

/// El SENA sólo ofrece técnicos y tecnólogos; sin marcador se asume técnico.
pub fn nivel_sena(titulo: &str) -> NivelFormacion {
    let t = titulo.to_lowercase();
    if t.contains("tecnólogo") || t.contains("tecnologo") {
        NivelFormacion::Tecnologico
    } else {
        NivelFormacion::Tecnico
    }
}

pub fn area_sena(titulo: &str) -> &'static str {
    let t = titulo.to_lowercase();
    MARCADORES_AREA
        .iter()
        .find(|(marcadores, _)| marcadores.iter().any(|m| t.contains(m)))
        .map(|(_, area)| *area)
        .unwrap_or(AREA_POR_DEFECTO)
}

fn programa_sena(p: &ProgramaSena) -> Programa {
    let titulo = p.titulo.trim().to_string();
    let id_programa = p.id_programa.trim();
    let id = slugify(&format!("sena-{}-{}", id_programa, titulo));

    Programa {
        id: if id.is_empty() { format!("sena-{}", id_programa) } else { id },
        nivel: nivel_sena(&titulo),
        area: area_sena(&titulo).to_string(),
        duracion_meses: DURACION_SENA_MESES,
        modalidad: modalidad_desde_codigo(&p.modalidad),
        matricula_cop_anual: 0,
        requisitos: vec![REQUISITO_SENA.to_string()],
        titulo,
    }
}

/// Arma la institución SENA con su oferta, en el orden del listado.
pub fn institucion_sena(programas: &[ProgramaSena]) -> Institucion {
    Institucion {
        id: ID_SENA.to_string(),
        codigo_institucion: None,
        nombre: "SENA (Servicio Nacional de Aprendizaje)".to_string(),
        tipo: TipoInstitucion::Publica,
        ciudad: "Nacional".to_string(),
        departamento: "Colombia".to_string(),
        website: "https://www.sena.edu.co/".to_string(),
        logo: "https://www.sena.edu.co/Style%20Library/alayout/images/logoSena.png".to_string(),
        programas: programas.iter().map(programa_sena).collect(),
        resenas: vec![Resena {
            name: "Estudiante".to_string(),
            rating: 5,
            text: "Oferta amplia y gratuita; buena conexión con empleabilidad.".to_string(),
        }],
    }
}

/// Clave de orden alfabético en español: sin tildes ni mayúsculas, y la ñ
/// después de la n.
fn clave_orden(nombre: &str) -> String {
    let mut clave = String::with_capacity(nombre.len());
    for c in nombre.trim().chars().flat_map(char::to_lowercase) {
        match c {
            'á' | 'à' | 'ä' => clave.push('a'),
            'é' | 'è' | 'ë' => clave.push('e'),
            'í' | 'ì' | 'ï' => clave.push('i'),
            'ó' | 'ò' | 'ö' => clave.push('o'),
            'ú' | 'ù' | 'ü' => clave.push('u'),
            'ñ' => clave.push_str("n~"),
            _ => clave.push(c),
        }
    }
    clave
}

/// Quita cualquier SENA previo y agrega el nuevo al catálogo, ordenado por
/// nombre. Sin programas no se agrega nada ni se reordena. Devuelve el
/// número de programas SENA integrados.
pub fn integrar_sena(instituciones: &mut Vec<Institucion>, programas: &[ProgramaSena]) -> usize {
    instituciones.retain(|i| i.id != ID_SENA);

    if programas.is_empty() {
        warn!("el listado SENA no trae programas; no se integra");
        return 0;
    }

    let sena = institucion_sena(programas);
    let total = sena.programas.len();
    instituciones.push(sena);
    // estable: nombres iguales conservan su orden previo
    instituciones.sort_by_cached_key(|i| clave_orden(&i.nombre));
    info!("SENA integrado con {} programas", total);
    total
}
