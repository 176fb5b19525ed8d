use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::CatalogoResult;
use crate::models::Institucion;

/// Ruta por defecto del JSON generado (relativa a la raíz del proyecto)
pub const RUTA_SALIDA_POR_DEFECTO: &str = "src/data/universities.json";

/// Serializa el catálogo como un único arreglo JSON en UTF-8. Los caracteres
/// no ASCII se escriben tal cual (serde_json no los escapa).
pub fn serializar_catalogo(instituciones: &[Institucion], pretty: bool) -> CatalogoResult<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(instituciones)?
    } else {
        serde_json::to_vec(instituciones)?
    };
    Ok(bytes)
}

/// Escribe el catálogo en `ruta`, creando el directorio si no existe.
/// El documento se arma completo en memoria antes de tocar el disco.
pub fn escribir_catalogo(ruta: &Path, instituciones: &[Institucion], pretty: bool) -> CatalogoResult<()> {
    let bytes = serializar_catalogo(instituciones, pretty)?;

    if let Some(dir) = ruta.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(ruta, &bytes)?;
    info!("{} bytes escritos en {}", bytes.len(), ruta.display());
    Ok(())
}
