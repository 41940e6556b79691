pub trait Confirm: Send {
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
