//! Duración de programas en meses a partir de `NÚMERO_PERIODOS_DE_DURACIÓN`
//! y `PERIODICIDAD`.

/// Duración asignada cuando el número de periodos no viene (8 años).
pub const DURACION_DESCONOCIDA_MESES: i64 = 96;

/// Con periodicidad desconocida, hasta este número de periodos se asumen semestres;
/// por encima, el número ya está en meses.
pub const MAX_PERIODOS_SEMESTRALES: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Periodicidad {
    Semestral,
    Anual,
    Cuatrimestral,
    Trimestral,
    Bimestral,
    Mensual,
    Desconocida,
}

impl Periodicidad {
    /// Reconoce la unidad por subcadena. "cuatr" se revisa antes que "trim"
    /// porque "cuatrimestral" contiene ambas.
    pub fn desde_texto(texto: &str) -> Self {
        let per = texto.to_lowercase();
        if per.contains("sem") {
            Periodicidad::Semestral
        } else if per.contains("año") || per.contains("anio") || per.contains("anual") {
            Periodicidad::Anual
        } else if per.contains("cuatr") {
            Periodicidad::Cuatrimestral
        } else if per.contains("trim") {
            Periodicidad::Trimestral
        } else if per.contains("bim") {
            Periodicidad::Bimestral
        } else if per.contains("mes") || per.contains("mensual") {
            Periodicidad::Mensual
        } else {
            Periodicidad::Desconocida
        }
    }

    pub fn meses_por_periodo(self) -> Option<f64> {
        match self {
            Periodicidad::Semestral => Some(6.0),
            Periodicidad::Anual => Some(12.0),
            Periodicidad::Cuatrimestral => Some(4.0),
            Periodicidad::Trimestral => Some(3.0),
            Periodicidad::Bimestral => Some(2.0),
            Periodicidad::Mensual => Some(1.0),
            Periodicidad::Desconocida => None,
        }
    }
}

// Redondeo al entero más cercano; los empates van al par (2.5 -> 2, 3.5 -> 4).
fn redondear(v: f64) -> i64 {
    v.round_ties_even() as i64
}

/// Convierte (periodos, periodicidad) a meses.
pub fn duracion_meses(periodos: Option<f64>, periodicidad: &str) -> i64 {
    let Some(p) = periodos else {
        return DURACION_DESCONOCIDA_MESES;
    };

    match Periodicidad::desde_texto(periodicidad).meses_por_periodo() {
        Some(factor) => redondear(p * factor),
        None if p <= MAX_PERIODOS_SEMESTRALES => redondear(p * 6.0),
        None => redondear(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodicidad_desde_texto() {
        assert_eq!(Periodicidad::desde_texto("Semestral"), Periodicidad::Semestral);
        assert_eq!(Periodicidad::desde_texto("ANUAL"), Periodicidad::Anual);
        assert_eq!(Periodicidad::desde_texto("Por año"), Periodicidad::Anual);
        assert_eq!(Periodicidad::desde_texto("Cuatrimestral"), Periodicidad::Cuatrimestral);
        assert_eq!(Periodicidad::desde_texto("Trimestral"), Periodicidad::Trimestral);
        assert_eq!(Periodicidad::desde_texto("Bimestral"), Periodicidad::Bimestral);
        assert_eq!(Periodicidad::desde_texto("Mensual"), Periodicidad::Mensual);
        assert_eq!(Periodicidad::desde_texto("Meses"), Periodicidad::Mensual);
        assert_eq!(Periodicidad::desde_texto("nan"), Periodicidad::Desconocida);
        assert_eq!(Periodicidad::desde_texto(""), Periodicidad::Desconocida);
    }

    #[test]
    fn test_duracion_unidades_reconocidas() {
        assert_eq!(duracion_meses(Some(2.0), "semestral"), 12);
        assert_eq!(duracion_meses(Some(10.0), "Semestral"), 60);
        assert_eq!(duracion_meses(Some(4.0), "anual"), 48);
        assert_eq!(duracion_meses(Some(3.0), "Cuatrimestral"), 12);
        assert_eq!(duracion_meses(Some(4.0), "Trimestral"), 12);
        assert_eq!(duracion_meses(Some(6.0), "Bimestral"), 12);
        assert_eq!(duracion_meses(Some(18.0), "Mensual"), 18);
        assert_eq!(duracion_meses(Some(1.5), "Anual"), 18);
    }

    #[test]
    fn test_duracion_lineal_en_periodos() {
        for p in 1..=12 {
            assert_eq!(duracion_meses(Some(p as f64), "Semestral"), 6 * p);
            assert_eq!(duracion_meses(Some(p as f64), "Anual"), 12 * p);
        }
    }

    #[test]
    fn test_duracion_periodicidad_desconocida() {
        assert_eq!(duracion_meses(Some(10.0), ""), 60);
        assert_eq!(duracion_meses(Some(20.0), "nan"), 120);
        assert_eq!(duracion_meses(Some(24.0), "otra"), 24);
        assert_eq!(duracion_meses(Some(36.4), ""), 36);
    }

    #[test]
    fn test_duracion_sin_periodos() {
        assert_eq!(duracion_meses(None, "Semestral"), DURACION_DESCONOCIDA_MESES);
        assert_eq!(duracion_meses(None, ""), 96);
    }

    #[test]
    fn test_redondeo_empates_al_par() {
        assert_eq!(duracion_meses(Some(2.5), "Mensual"), 2);
        assert_eq!(duracion_meses(Some(3.5), "Mensual"), 4);
    }
}
