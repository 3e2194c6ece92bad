/// `ProcID`s are usually numeric PIDs; however, on some systems, they may be something else
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcId<S: AsRef<str> + Clone> {
    PID(i32),
    Name(S),
}

impl<S: AsRef<str> + Clone> ProcId<S> {
    /// The emitting process's own id. RFC 5424 allows a NILVALUE PROCID,
    /// but this emitter always has a real one.
    pub fn current() -> Self {
        ProcId::PID(std::process::id() as i32)
    }
}
