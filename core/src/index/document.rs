use crate::error::CoreResult;

/// On-disk bytes of the index document: a JSON array of strings with
/// 2-space indentation and exactly one trailing newline.
pub fn render_index_document(names: &[String]) -> CoreResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(names)?;
    bytes.push(b'\n');
    Ok(bytes)
}
