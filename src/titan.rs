use std::fmt;
use std::sync::Arc;
use crate::{new_db_options, DBOptions};

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TitanBlobRunMode {
    /// Titan reads and writes blobs as normal.
    #[default]
    Normal,

    /// Flush and compaction stop writing values into the blob log. Existing
    /// values in the blob log are still readable and garbage collected.
    ReadOnly,

    /// Flush and compaction turn blob indexes back into real values, read from
    /// the blob log, and store them in SST files.
    Fallback,
}

impl From<u8> for TitanBlobRunMode {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::ReadOnly,
            2 => Self::Fallback,
            _ => Self::Normal,
        }
    }
}

/// Options of the Titan blob storage, layered over the base `DBOptions`.
#[derive(Clone, Debug)]
pub struct TitanDBOptions {
    /// Directory for Titan's own data. Empty means `{dbname}/titandb`.
    pub dirname: String,

    pub disable_background_gc: bool,

    pub max_background_gc: i32,

    /// How often obsolete blob files are purged. 0 never purges them.
    pub purge_obsolete_files_period_sec: u32,

    /// How often Titan's internal stats are dumped to the info log. 0 disables it.
    pub titan_stats_dump_period_sec: u32,

    db_options: Arc<DBOptions>,
}

impl TitanDBOptions {
    pub fn new() -> Self {
        Self {
            dirname: String::new(),
            disable_background_gc: false,
            max_background_gc: 1,
            purge_obsolete_files_period_sec: 10,
            titan_stats_dump_period_sec: 600,
            db_options: new_db_options(),
        }
    }

    pub fn db_options(&self) -> Arc<DBOptions> {
        self.db_options.clone()
    }

    /// Mutable access to the base options. Clones them first if the handle is
    /// shared, so other holders are not affected.
    pub fn db_options_mut(&mut self) -> &mut DBOptions {
        Arc::make_mut(&mut self.db_options)
    }
}

impl Default for TitanDBOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TitanDBOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.dirname,
            self.disable_background_gc,
            self.max_background_gc,
            self.purge_obsolete_files_period_sec,
            self.titan_stats_dump_period_sec,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::DBOptions;
    use super::{TitanBlobRunMode, TitanDBOptions};

    #[test]
    fn test_titan_db_options_default() {
        let options = TitanDBOptions::new();
        assert_eq!(options.dirname, "");
        assert!(!options.disable_background_gc);
        assert_eq!(options.max_background_gc, 1);
        assert_eq!(options.purge_obsolete_files_period_sec, 10);
        assert_eq!(options.titan_stats_dump_period_sec, 600);
        assert_eq!(*options.db_options(), DBOptions::default());
        assert_eq!(options.to_string(), " false 1 10 600");
    }

    #[test]
    fn test_titan_db_options_display() {
        let mut options = TitanDBOptions::default();
        options.dirname = String::from("/tmp/titandb");
        options.disable_background_gc = true;
        options.max_background_gc = 4;
        assert_eq!(format!("{}", options), "/tmp/titandb true 4 10 600");
    }

    #[test]
    fn test_titan_db_options_share_handle() {
        let mut options = TitanDBOptions::new();
        let shared = options.db_options();
        assert_eq!(Arc::strong_count(&shared), 2);

        options.db_options_mut().create_if_missing = true;
        assert!(options.db_options().create_if_missing);
        assert!(!shared.create_if_missing);
        assert_eq!(Arc::strong_count(&shared), 1);

        let copy = options.clone();
        assert!(Arc::ptr_eq(&copy.db_options(), &options.db_options()));
    }

    #[test]
    fn test_blob_run_mode() {
        assert_eq!(TitanBlobRunMode::default(), TitanBlobRunMode::Normal);
        assert_eq!(TitanBlobRunMode::from(1), TitanBlobRunMode::ReadOnly);
        assert_eq!(TitanBlobRunMode::from(2), TitanBlobRunMode::Fallback);
        assert_eq!(TitanBlobRunMode::from(7), TitanBlobRunMode::Normal);
        assert_eq!(TitanBlobRunMode::Fallback as u8, 2);
    }
}
