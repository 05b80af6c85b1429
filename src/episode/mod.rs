mod record;
mod scan;

pub use record::{
    EpisodeRecord, derive_title, episode_guid, mime_for_extension, publish_date_for_index,
    record_from_file,
};
pub use scan::{AUDIO_EXTENSIONS, is_audio_file, scan_audio_files};
