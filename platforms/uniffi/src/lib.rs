#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::{Arc, Once};

use loan_core::LoanCore;
use loan_core::config::core_config::{CoreConfig, InputFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::binding::LoanCoreBinding;
use crate::error::BindingError;
use crate::utils::native_session_storage::{NativeSessionStorage, NativeSessionStorageWrapper};

mod binding;
mod error;
mod utils;


uniffi::setup_scaffolding!();

const DEFAULT_LOG_FILTER: &str = "info,loan_core=debug,loan_core_uniffi=debug";

static TRACING: Once = Once::new();

/// Creates the core.
///
/// `config_json` is merged on top of the bundled configuration, e.g. to point
/// the client at another backend.
#[uniffi::export]
fn initialize_core(
    config_json: Option<String>,
    native_session_storage: Arc<dyn NativeSessionStorage>,
) -> Result<Arc<LoanCoreBinding>, BindingError> {
    TRACING.call_once(|| initialize_tracing(DEFAULT_LOG_FILTER));

    let mut inputs = vec![InputFormat::yaml_str(include_str!(
        "../../../config/config.yml"
    ))];
    if let Some(config_json) = config_json {
        inputs.push(InputFormat::json_str(config_json));
    }
    let config = CoreConfig::parse(inputs)?;

    let core = LoanCore::new(
        config,
        Arc::new(NativeSessionStorageWrapper(native_session_storage)),
        None,
    )?;

    Ok(Arc::new(LoanCoreBinding::new(core)))
}

fn initialize_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);

    #[cfg(target_os = "android")]
    let registry = registry.with(tracing_android::layer("loan_core").ok());
    #[cfg(not(target_os = "android"))]
    let registry = registry.with(tracing_subscriber::fmt::layer());

    if let Err(error) = registry.try_init() {
        tracing::debug!(%error, "Tracing already initialized");
    }
}
