// crates/cli/src/config.rs
use crate::args::Args;
pub use sloc_engine::config::{ScanConfig, ScanConfigBuilder};
use sloc_engine::EngineError;

impl TryFrom<&Args> for ScanConfig {
    type Error = EngineError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let mut builder = ScanConfigBuilder::default();
        builder.root(args.path.clone());

        if args.no_default_ignore {
            builder.ignore_exactly(
                args.ignore
                    .iter()
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty()),
            );
        } else {
            builder.extra_ignore(&args.ignore);
        }

        Ok(builder.build()?)
    }
}
