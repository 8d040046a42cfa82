use std::sync::Arc;

pub mod ffi;
mod titan;
mod utils;

pub use titan::{TitanBlobRunMode, TitanDBOptions};
pub use utils::logger::init_logger;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InfoLogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Header,
}

impl From<u8> for InfoLogLevel {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Debug,
            2 => Self::Warn,
            3 => Self::Error,
            4 => Self::Fatal,
            5 => Self::Header,
            _ => Self::Info,
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WalRecoveryMode {
    TolerateCorruptedTailRecords,
    AbsoluteConsistency,
    PointInTimeRecovery,
    SkipAnyCorruptedRecords,
}

impl From<u8> for WalRecoveryMode {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::TolerateCorruptedTailRecords,
            1 => Self::AbsoluteConsistency,
            3 => Self::SkipAnyCorruptedRecords,
            _ => Self::PointInTimeRecovery,
        }
    }
}

/// Database-wide options of the storage engine.
///
/// Callers customise an instance by assigning fields after construction. When the
/// instance sits behind a shared handle, go through [`Arc::make_mut`] so other
/// holders keep their view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DBOptions {
    pub create_if_missing: bool,
    pub create_missing_column_families: bool,
    pub error_if_exists: bool,
    pub paranoid_checks: bool,
    pub info_log_level: InfoLogLevel,
    /// -1 keeps every file open.
    pub max_open_files: i32,
    pub max_file_opening_threads: i32,
    pub max_total_wal_size: u64,
    pub use_fsync: bool,
    /// Empty means the info log goes next to the data.
    pub db_log_dir: String,
    /// Empty means WAL files go next to the data.
    pub wal_dir: String,
    pub delete_obsolete_files_period_micros: u64,
    pub max_background_jobs: i32,
    pub max_background_compactions: i32,
    pub max_background_flushes: i32,
    pub max_subcompactions: u32,
    pub max_log_file_size: usize,
    pub log_file_time_to_roll: usize,
    pub keep_log_file_num: usize,
    pub recycle_log_file_num: usize,
    pub max_manifest_file_size: u64,
    pub table_cache_numshardbits: i32,
    pub wal_ttl_seconds: u64,
    pub wal_size_limit_mb: u64,
    pub manifest_preallocation_size: usize,
    pub allow_mmap_reads: bool,
    pub allow_mmap_writes: bool,
    pub use_direct_reads: bool,
    pub use_direct_io_for_flush_and_compaction: bool,
    pub is_fd_close_on_exec: bool,
    pub stats_dump_period_sec: u32,
    pub stats_persist_period_sec: u32,
    pub advise_random_on_open: bool,
    /// 0 disables the cross column family memtable limit.
    pub db_write_buffer_size: usize,
    pub writable_file_max_buffer_size: usize,
    pub bytes_per_sync: u64,
    pub wal_bytes_per_sync: u64,
    pub delayed_write_rate: u64,
    pub enable_pipelined_write: bool,
    pub unordered_write: bool,
    pub allow_concurrent_memtable_write: bool,
    pub enable_write_thread_adaptive_yield: bool,
    pub max_write_batch_group_size_bytes: u64,
    pub wal_recovery_mode: WalRecoveryMode,
    pub two_write_queues: bool,
    pub manual_wal_flush: bool,
    pub avoid_flush_during_recovery: bool,
    pub avoid_flush_during_shutdown: bool,
    pub allow_ingest_behind: bool,
    pub atomic_flush: bool,
    pub dump_malloc_stats: bool,
    pub skip_stats_update_on_db_open: bool,
}

impl Default for DBOptions {
    fn default() -> Self {
        Self {
            create_if_missing: false,
            create_missing_column_families: false,
            error_if_exists: false,
            paranoid_checks: true,
            info_log_level: InfoLogLevel::Info,
            max_open_files: -1,
            max_file_opening_threads: 16,
            max_total_wal_size: 0,
            use_fsync: false,
            db_log_dir: String::new(),
            wal_dir: String::new(),
            delete_obsolete_files_period_micros: 6 * 60 * 60 * 1000000,
            max_background_jobs: 2,
            max_background_compactions: -1,
            max_background_flushes: -1,
            max_subcompactions: 1,
            max_log_file_size: 0,
            log_file_time_to_roll: 0,
            keep_log_file_num: 1000,
            recycle_log_file_num: 0,
            max_manifest_file_size: 1024 * 1024 * 1024,
            table_cache_numshardbits: 6,
            wal_ttl_seconds: 0,
            wal_size_limit_mb: 0,
            manifest_preallocation_size: 4 * 1024 * 1024,
            allow_mmap_reads: false,
            allow_mmap_writes: false,
            use_direct_reads: false,
            use_direct_io_for_flush_and_compaction: false,
            is_fd_close_on_exec: true,
            stats_dump_period_sec: 600,
            stats_persist_period_sec: 600,
            advise_random_on_open: true,
            db_write_buffer_size: 0,
            writable_file_max_buffer_size: 1024 * 1024,
            bytes_per_sync: 0,
            wal_bytes_per_sync: 0,
            delayed_write_rate: 0,
            enable_pipelined_write: false,
            unordered_write: false,
            allow_concurrent_memtable_write: true,
            enable_write_thread_adaptive_yield: true,
            max_write_batch_group_size_bytes: 1 << 20,
            wal_recovery_mode: WalRecoveryMode::PointInTimeRecovery,
            two_write_queues: false,
            manual_wal_flush: false,
            avoid_flush_during_recovery: false,
            avoid_flush_during_shutdown: false,
            allow_ingest_behind: false,
            atomic_flush: false,
            dump_malloc_stats: false,
            skip_stats_update_on_db_open: false,
        }
    }
}

/// Creates a default `DBOptions` behind a shared handle.
///
/// Each call allocates a fresh object. It is freed when the last clone of the
/// returned `Arc` is dropped.
pub fn new_db_options() -> Arc<DBOptions> {
    Arc::new(DBOptions::default())
}
