use tracing::info;

use crate::catalogo::construir_catalogo;
use crate::config::Config;
use crate::error::CatalogoResult;
use crate::excel::leer_programas_excel;
use crate::salida::escribir_catalogo;
use crate::sena::{integrar_sena, leer_programas_sena};

/// Conteos de una ejecución. Son informativos, no forman parte del JSON generado.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resumen {
    pub instituciones: usize,
    pub programas: usize,
    pub filas_leidas: usize,
    pub filas_sin_titulo: usize,
    pub programas_duplicados: usize,
    /// Programas SENA integrados; 0 si no se pidió la integración.
    pub programas_sena: usize,
}

/// Ejecuta el pipeline completo: leer Excel -> normalizar/agrupar ->
/// integrar SENA (opcional) -> escribir JSON.
/// Cualquier error sale antes de escribir la salida.
pub fn ejecutar(config: &Config) -> CatalogoResult<Resumen> {
    let filas = leer_programas_excel(&config.entrada, config.hoja.as_deref())?;
    let programas_sena = match &config.sena {
        Some(ruta) => Some(leer_programas_sena(ruta)?),
        None => None,
    };

    let mut catalogo = construir_catalogo(&filas, &config.sitio_web);
    let integrados = match &programas_sena {
        Some(programas) => integrar_sena(&mut catalogo.instituciones, programas),
        None => 0,
    };

    let resumen = Resumen {
        instituciones: catalogo.instituciones.len(),
        programas: catalogo.total_programas(),
        filas_leidas: filas.len(),
        filas_sin_titulo: catalogo.filas_sin_titulo,
        programas_duplicados: catalogo.programas_duplicados,
        programas_sena: integrados,
    };
    info!(
        "catálogo armado: {} instituciones, {} programas ({} filas sin título, {} duplicados descartados)",
        resumen.instituciones, resumen.programas, resumen.filas_sin_titulo, resumen.programas_duplicados
    );

    escribir_catalogo(&config.salida, &catalogo.instituciones, config.pretty)?;
    Ok(resumen)
}
