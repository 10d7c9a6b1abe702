//! Host collaborator contract — geometry, padding, and frame presentation.
//!
//! The indicator is a leaf: windowing, layout, and the repaint loop belong to
//! the host. At paint time the host supplies the drawable size and padding
//! and receives the finished off-screen frame to blit.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::layout::{Padding, Size};

/// What the host provides to a paint call.
pub trait Host {
    /// Current control size.
    fn client_size(&self) -> Size;

    /// Layout-provided insets. Not owned by the indicator.
    fn padding(&self) -> Padding;

    /// Blit a finished off-screen frame onto the visible surface.
    ///
    /// Failures are the host's own (file write, backend loss); the indicator
    /// propagates them unchanged.
    fn present(&mut self, frame: &Canvas) -> Result<()>;
}

pub mod mock {
    //! Fixed-geometry host for tests — captures every presented frame.

    use super::*;

    pub struct MockHost {
        pub size: Size,
        pub padding: Padding,
        pub presented: Vec<Canvas>,
    }

    impl MockHost {
        pub fn new(size: Size) -> Self {
            MockHost {
                size,
                padding: Padding::default(),
                presented: Vec::new(),
            }
        }

        pub fn with_padding(size: Size, padding: Padding) -> Self {
            MockHost {
                size,
                padding,
                presented: Vec::new(),
            }
        }
    }

    impl Host for MockHost {
        fn client_size(&self) -> Size {
            self.size
        }

        fn padding(&self) -> Padding {
            self.padding
        }

        fn present(&mut self, frame: &Canvas) -> Result<()> {
            self.presented.push(frame.clone());
            Ok(())
        }
    }
}
