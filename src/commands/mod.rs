pub mod rename;

/// Command handlers return their serializable output plus a process exit code.
pub type CmdResult<T> = modcon::Result<(T, i32)>;
