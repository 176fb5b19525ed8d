//! Mapeo de textos libres del SNIES (sector, modalidad, nivel) a las
//! categorías que usa el catálogo. Todas las comparaciones son por subcadena
//! sobre el texto en minúsculas.

use crate::models::{Modalidad, NivelFormacion, TipoInstitucion};
use crate::normalizacion::es_vacio_o_nan;

const MARCADORES_PUBLICA: &[&str] = &["oficial", "public", "púb"];

/// Marcadores de nivel en orden de prioridad: gana el primero que aparezca.
const MARCADORES_NIVEL: &[(&[&str], NivelFormacion)] = &[
    (&["doctor"], NivelFormacion::Doctorado),
    (&["maestr"], NivelFormacion::Maestria),
    (&["especial"], NivelFormacion::Especializacion),
    (&["tecnol", "tecnólogo", "tecnologo"], NivelFormacion::Tecnologico),
    (&["técnic", "tecnic"], NivelFormacion::Tecnico),
    (&["universit", "profesional", "pregrado"], NivelFormacion::Pregrado),
    (&["posgrado"], NivelFormacion::Posgrado),
];

fn contiene_alguno(texto: &str, marcadores: &[&str]) -> bool {
    marcadores.iter().any(|m| texto.contains(m))
}

/// Sector → tipo de institución. Todo lo que no sea oficial/público es privado.
pub fn tipo_institucion(sector: &str) -> TipoInstitucion {
    if contiene_alguno(&sector.to_lowercase(), MARCADORES_PUBLICA) {
        TipoInstitucion::Publica
    } else {
        TipoInstitucion::Privada
    }
}

/// Modalidad de oferta. Por defecto Presencial.
pub fn mapear_modalidad(texto: &str) -> Modalidad {
    let m = texto.to_lowercase();
    if m.contains("virtual") || m.contains("distancia") {
        return Modalidad::Virtual;
    }
    if m.contains("presencial") {
        // Inalcanzable: "virtual" ya se resolvió arriba. Se mantiene el orden de reglas.
        if m.contains("virtual") {
            return Modalidad::Hibrida;
        }
        return Modalidad::Presencial;
    }
    if contiene_alguno(&m, &["dual", "hibr", "híbr"]) {
        return Modalidad::Hibrida;
    }
    Modalidad::Presencial
}

/// Nivel de formación. Si ningún marcador aplica se devuelve el texto tal cual,
/// salvo que esté vacío o sea "nan", en cuyo caso es Pregrado.
pub fn mapear_nivel(texto: &str) -> NivelFormacion {
    let l = texto.to_lowercase();
    for (marcadores, nivel) in MARCADORES_NIVEL {
        if contiene_alguno(&l, marcadores) {
            return nivel.clone();
        }
    }
    if es_vacio_o_nan(texto) {
        NivelFormacion::Pregrado
    } else {
        NivelFormacion::Otro(texto.trim().to_string())
    }
}
