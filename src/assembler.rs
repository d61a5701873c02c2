use tracing::trace;

const BLOCK_SEPARATOR: &str = "\n";
const PRIOR_SEPARATOR: &str = "\n\n";

/// Joins formatted blocks into the clipboard payload.
///
/// Returns `None` when there are no blocks, so callers never write an empty
/// clipboard. With `append` set, a non-empty `prior` clipboard text is kept
/// in front of the new blocks, separated by a blank line.
pub fn assemble_payload<S: AsRef<str>>(
    blocks: &[S],
    prior: Option<&str>,
    append: bool,
) -> Option<String> {
    if blocks.is_empty() {
        return None;
    }

    let joined = blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR);

    match prior {
        Some(prior) if append && !prior.is_empty() => {
            trace!("Appending to {} bytes of existing clipboard text", prior.len());
            Some(format!("{prior}{PRIOR_SEPARATOR}{joined}"))
        }
        _ => Some(joined),
    }
}
