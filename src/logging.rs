use tracing_subscriber::EnvFilter;

/// Filtro usado cuando `RUST_LOG` no está definido.
const FILTRO_POR_DEFECTO: &str = "catalogo_snies=info";

/// Inicializa el logging a stderr. stdout queda libre para el resumen final.
pub fn init_logging() {
    let filtro = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRO_POR_DEFECTO));

    // try_init: si ya hay un subscriber global (p. ej. en tests) no se reemplaza
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtro)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
