use std::path::Path;

use counter_logging::{counter_debug, counter_info};
use wordcount_core::{count_text, WordFrequencyMap};

use crate::decode::decode_text;
use crate::source::{read_source, SourceError};

/// Count word occurrences in the file at `path`.
///
/// Pipeline: read -> decode -> count. Acquiring the source is the only
/// failure point; once the bytes are read the operation runs to completion.
pub fn count_file(path: &Path) -> Result<WordFrequencyMap, SourceError> {
    let bytes = read_source(path)?;
    let decoded = decode_text(&bytes);
    counter_debug!(
        "decoded {:?}: {} bytes as {}",
        path,
        bytes.len(),
        decoded.encoding_label
    );

    let map = count_text(&decoded.text);
    counter_info!(
        "counted {:?}: {} distinct words, {} tokens",
        path,
        map.len(),
        map.total_count()
    );
    Ok(map)
}
