//! Normalización de campos del export SNIES.
//!
//! Submódulos:
//! - `categorias`: sector, modalidad y nivel de formación a vocabulario fijo
//! - `duracion`: conversión de (periodos, periodicidad) a meses
//!
//! Todo es puro: ninguna función registra ni falla; los datos malformados se
//! resuelven con valores por defecto.

/// Mapeo de textos libres a categorías controladas
pub mod categorias;

/// Cálculo de duración en meses
pub mod duracion;

pub use categorias::{mapear_modalidad, mapear_nivel, tipo_institucion};
pub use duracion::{duracion_meses, Periodicidad, DURACION_DESCONOCIDA_MESES};

/// Largo máximo de cualquier slug generado.
pub const LARGO_MAX_SLUG: usize = 80;

/// Marcador textual de "no es un número" que deja el export tras la coerción.
const MARCADOR_NAN: &str = "nan";

/// `true` si el texto está vacío o es el marcador "nan" (sin importar mayúsculas).
pub fn es_vacio_o_nan(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.eq_ignore_ascii_case(MARCADOR_NAN)
}

/// Devuelve el texto recortado, o `respaldo` si está vacío o es "nan".
pub fn texto_o(s: &str, respaldo: &str) -> String {
    if es_vacio_o_nan(s) {
        respaldo.to_string()
    } else {
        s.trim().to_string()
    }
}

/// Limpia un código numérico exportado como texto: recorta y quita un `.0` final.
/// Un código vacío o "nan" queda como `"nan"`, así todas las celdas sin código
/// caen en el mismo grupo y generan los mismos ids.
pub fn limpiar_codigo(s: &str) -> String {
    if es_vacio_o_nan(s) {
        return MARCADOR_NAN.to_string();
    }
    let t = s.trim();
    t.strip_suffix(".0").unwrap_or(t).to_string()
}

/// Convierte un texto a número. Cualquier cosa que no sea un número finito
/// queda como ausente (`None`), no como cero.
pub fn texto_a_numero(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Genera un slug: minúsculas, cada tramo de caracteres fuera de `[a-z0-9]`
/// pasa a ser un único guion, sin guiones en los extremos, truncado a
/// `LARGO_MAX_SLUG`.
///
/// ```
/// use catalogo_snies::normalizacion::slugify;
/// assert_eq!(slugify("  Universidad de Antioquia -- 1201 "), "universidad-de-antioquia-1201");
/// assert_eq!(slugify("Ingeniería"), "ingenier-a");
/// ```
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut guion_pendiente = false;

    for ch in s.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if guion_pendiente && !out.is_empty() {
                out.push('-');
            }
            guion_pendiente = false;
            out.push(ch);
        } else {
            guion_pendiente = true;
        }
    }

    // `out` es ASCII, truncar por bytes es seguro
    out.truncate(LARGO_MAX_SLUG);
    while out.ends_with('-') {
        out.pop();
    }
    out
}
