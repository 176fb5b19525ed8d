// Estructuras de datos principales: fila cruda del Excel y registros de salida.

use serde::{Serialize, Serializer};

/// Fila cruda del export SNIES, una por oferta (institución, programa).
/// Los textos llegan recortados; los numéricos ya coercionados (`None` si la
/// celda estaba vacía o no era un número).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilaPrograma {
    pub codigo_institucion: String,
    pub nombre_institucion: String,
    pub sector: String,
    pub departamento: String,
    pub municipio: String,
    pub nombre_programa: String,
    pub codigo_programa: String,
    pub nivel_formacion: String,
    pub modalidad: String,
    pub area_conocimiento: String,
    pub numero_periodos: Option<f64>,
    pub periodicidad: String,
    pub costo_matricula: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TipoInstitucion {
    #[serde(rename = "Pública")]
    Publica,
    Privada,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Modalidad {
    Virtual,
    Presencial,
    #[serde(rename = "Híbrida")]
    Hibrida,
}

/// Nivel de formación. `Otro` conserva el texto original cuando ningún
/// marcador reconocido aparece en él.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NivelFormacion {
    Doctorado,
    Maestria,
    Especializacion,
    Tecnologico,
    Tecnico,
    Pregrado,
    Posgrado,
    Otro(String),
}

impl NivelFormacion {
    pub fn as_str(&self) -> &str {
        match self {
            NivelFormacion::Doctorado => "Doctorado",
            NivelFormacion::Maestria => "Maestría",
            NivelFormacion::Especializacion => "Especialización",
            NivelFormacion::Tecnologico => "Tecnológico",
            NivelFormacion::Tecnico => "Técnico",
            NivelFormacion::Pregrado => "Pregrado",
            NivelFormacion::Posgrado => "Posgrado",
            NivelFormacion::Otro(texto) => texto,
        }
    }
}

impl Serialize for NivelFormacion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Programa {
    pub id: String,
    #[serde(rename = "title")]
    pub titulo: String,
    #[serde(rename = "level")]
    pub nivel: NivelFormacion,
    pub area: String,
    #[serde(rename = "durationMonths")]
    pub duracion_meses: i64,
    #[serde(rename = "modality")]
    pub modalidad: Modalidad,
    #[serde(rename = "tuitionCOPYear")]
    pub matricula_cop_anual: i64,
    /// Reservado para enriquecimiento posterior; este pipeline no lo llena.
    #[serde(rename = "requirements")]
    pub requisitos: Vec<String>,
}

/// Reseña de usuario tal como la consume el catálogo web.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resena {
    pub name: String,
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Institucion {
    pub id: String,
    /// Código SNIES. Las instituciones que no vienen del SNIES no lo llevan.
    #[serde(rename = "institutionCode", skip_serializing_if = "Option::is_none")]
    pub codigo_institucion: Option<String>,
    #[serde(rename = "name")]
    pub nombre: String,
    #[serde(rename = "type")]
    pub tipo: TipoInstitucion,
    #[serde(rename = "city")]
    pub ciudad: String,
    #[serde(rename = "department")]
    pub departamento: String,
    pub website: String,
    pub logo: String,
    #[serde(rename = "programs")]
    pub programas: Vec<Programa>,
    #[serde(rename = "reviews")]
    pub resenas: Vec<Resena>,
}
