//! Small form and feedback building blocks shared by the views.

mod alert;
pub use alert::{AlertBanner, Spinner};

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label, Select};

mod modal;
pub use modal::{Modal, ModalOverlay};
