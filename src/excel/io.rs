use calamine::Data;

use crate::normalizacion::texto_a_numero;

/// Texto de una celda tal como lo usa el catálogo. Los flotantes enteros salen
/// sin decimales (`1101.0` -> `"1101"`), que es como se leen los códigos; un
/// flotante no finito queda como el marcador "nan".
pub fn celda_a_texto(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if !f.is_finite() => "nan".to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(d) => d.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

/// Coerción numérica de una celda: números tal cual, textos parseados,
/// todo lo demás (vacío, error, fechas, NaN) queda ausente.
pub fn celda_a_numero(c: &Data) -> Option<f64> {
    match c {
        Data::Float(f) if f.is_finite() => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => texto_a_numero(s),
        _ => None,
    }
}

/// Normaliza un encabezado: sólo recorta espacios alrededor, los nombres de
/// columna se comparan exactos.
pub fn normalizar_encabezado(c: &Data) -> String {
    celda_a_texto(c).trim().to_string()
}

/// `true` si todas las celdas de la fila están vacías.
pub fn fila_vacia(fila: &[Data]) -> bool {
    fila.iter().all(|c| celda_a_texto(c).is_empty())
}
