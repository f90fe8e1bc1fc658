use log::{info, trace};

use super::chooser::Chooser;
use super::organizer::{organize, OrganizeReport};
use crate::context::Context;
use crate::parser::MetadataSource;
use crate::sink::CatalogSink;

/// Asks for a keyword until the user picks a novel, then organizes the working directory for it.
///
/// An empty search or the `Not Found` choice starts over. `keyword` answers the first prompt.
/// Returns `None` when cancelled before a novel was picked.
pub fn run(
    ctx: &Context,
    source: &dyn MetadataSource,
    chooser: &dyn Chooser,
    sink: &dyn CatalogSink,
    keyword: Option<String>,
) -> anyhow::Result<Option<OrganizeReport>> {
    trace!("session::run()");
    let mut keyword = keyword;

    loop {
        if ctx.cancel.is_cancelled() {
            return Ok(None);
        }

        let text = match keyword.take() {
            Some(text) => text,
            None => chooser.keyword()?,
        };

        let results = source.search(&text)?;
        if results.is_empty() {
            info!("nothing found for {:?}", text);
            continue;
        }

        let index = match chooser.choose(&results)? {
            Some(index) => index,
            None => {
                info!("Novel not selected");
                continue;
            }
        };

        let novel = source.novel(&results[index])?;

        return organize(ctx, &novel, sink).map(Some);
    }
}
