//! Action execution seam.

use crate::dep::ActionStatus;
use crate::error::Result;

/// Executes action bodies on behalf of the [`Engine`](super::Engine).
///
/// Implementations run `script` to completion with `args` as its
/// positional parameters and hand every line of combined output to
/// `on_line` as soon as it is produced. An `Err` means the action could
/// not be started at all; a non-zero exit is reported through the
/// returned [`ActionStatus`].
pub trait ActionRunner {
    /// Run one action body.
    fn run(
        &mut self,
        script: &str,
        args: &[String],
        on_line: &mut dyn FnMut(&str),
    ) -> Result<ActionStatus>;
}

impl<R: ActionRunner + ?Sized> ActionRunner for &mut R {
    fn run(
        &mut self,
        script: &str,
        args: &[String],
        on_line: &mut dyn FnMut(&str),
    ) -> Result<ActionStatus> {
        (**self).run(script, args, on_line)
    }
}
