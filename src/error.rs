use std::path::PathBuf;
use thiserror::Error;

/// Errores fatales del pipeline. Los problemas a nivel de dato (celdas vacías,
/// números ilegibles, categorías desconocidas) nunca llegan aquí: se resuelven
/// con valores por defecto durante la normalización.
#[derive(Error, Debug)]
pub enum CatalogoError {
    #[error("No encuentro el archivo: {}", .0.display())]
    ArchivoNoEncontrado(PathBuf),

    #[error("Error leyendo el libro Excel: {0}")]
    Excel(#[from] calamine::Error),

    #[error("La hoja '{0}' no existe en el libro")]
    HojaNoEncontrada(String),

    #[error("El libro {} no contiene hojas ni encabezados", .0.display())]
    LibroVacio(PathBuf),

    #[error("Falta la columna requerida '{0}'")]
    ColumnaFaltante(String),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON inválido en {}: {source}", .ruta.display())]
    JsonInvalido {
        ruta: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error serializando JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CatalogoResult<T> = Result<T, CatalogoError>;
