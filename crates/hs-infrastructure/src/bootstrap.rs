//! Strategies bootstrap
//!
//! Composition root for [`HandlerStrategies`].
//!
//! ```text
//! app container ──┐
//!                 ├─→ HandlerStrategiesBuilder → HandlerStrategies
//! CodecSettings ──┘   (RegisteredCodecContainer)
//! ```

use hs_application::HandlerStrategies;
use hs_domain::error::Result;
use hs_domain::ports::ComponentContainer;
use tracing::info;

use crate::config::{ConfigLoader, StrategiesConfig};
use crate::container::RegisteredCodecContainer;

/// Assemble the strategies an application starts with
///
/// Entries from `container` come first, followed by the codecs selected in
/// `config.codecs` unless `register_defaults` is off.
pub fn build_handler_strategies(
    config: &StrategiesConfig,
    container: Option<&dyn ComponentContainer>,
) -> Result<HandlerStrategies> {
    let mut builder = HandlerStrategies::empty();

    if let Some(container) = container {
        builder = builder.populate_from(container)?;
    }
    if config.codecs.register_defaults {
        let codecs = RegisteredCodecContainer::from_settings(&config.codecs);
        builder = builder.populate_from(&codecs)?;
    }

    let strategies = builder.build();
    info!(
        readers = strategies.message_readers().len(),
        writers = strategies.message_writers().len(),
        view_resolvers = strategies.view_resolvers().len(),
        "Handler strategies initialized"
    );
    Ok(strategies)
}

/// Load configuration with `loader` and assemble strategies from it
pub fn load_handler_strategies(
    loader: &ConfigLoader,
    container: Option<&dyn ComponentContainer>,
) -> Result<(StrategiesConfig, HandlerStrategies)> {
    let config = loader.load()?;
    let strategies = build_handler_strategies(&config, container)?;
    Ok((config, strategies))
}
