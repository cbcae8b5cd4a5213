use crate::{
    error::Result,
    log_warn,
    session::{Session, SessionState},
};

impl<T> Session<T> {
    /// Drop the link; every later send is rejected with `InvalidState`
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
        self.transport = None;
    }

    /// Pass a step's result through, closing the session if it failed
    pub(super) fn close_on_error<R>(&mut self, result: Result<R>) -> Result<R> {
        if let Err(e) = &result {
            log_warn!("Closing session: {}", e);
            self.close();
        }
        result
    }
}
