//! Summary enrichment with photo attribution.
//!
//! The viewer shows who took each encyclopedia photo and who made the texture
//! it renders. Those credits are not part of the summary API, so they are
//! merged into each fetched summary from the static credits table.

use crate::catalog;
use crate::models::MetadataRecord;
use log::debug;

/// Attaches the registered photo credits for a body to its summary record
///
/// # Arguments
///
/// * `record` - The fetched summary to enrich
/// * `id` - The body's canonical id
///
/// # Returns
///
/// `true` if credits were registered for the body and attached
pub fn attach_photo_credits(record: &mut MetadataRecord, id: &str) -> bool {
    match catalog::photo_credits(id) {
        Some(credits) => {
            record.photo_credits = Some(credits);
            true
        }
        None => {
            debug!("No photo credits registered for {}", id);
            false
        }
    }
}
