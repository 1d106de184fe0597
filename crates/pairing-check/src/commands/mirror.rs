use tracing::debug;

use super::MirrorArgs;
use crate::config::{FileConfig, Overrides, Settings};
use crate::error::Result;

pub(crate) fn run(args: MirrorArgs, quiet: bool) -> Result<()> {
    let settings = Settings::resolve(
        Overrides {
            source_segment: args.segments.source_segment,
            mirror_segment: args.segments.mirror_segment,
            ..Overrides::default()
        },
        FileConfig::load(args.config.as_deref())?,
    )?;
    let pair = settings.pair;

    for path in &args.paths {
        match pair.mirror_path(path) {
            Some(mirror) if !quiet => println!("{path} -> {mirror}"),
            Some(_) => {}
            None => debug!(%path, source = pair.source(), "path is outside the source tree"),
        }
    }

    Ok(())
}
