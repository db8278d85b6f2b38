use crate::error::Result;
use std::borrow::Cow;

/// Common surface of the alpha-channel name lists.
///
/// The legacy list stores Pascal strings and the Unicode list stores
/// length-prefixed UTF-16; each codec keeps its own wire rule.
pub trait ChannelNames {
    fn len(&self) -> usize;

    fn name(&self, idx: usize) -> Option<Cow<'_, str>>;

    /// Appends a name, rejecting names the wire format cannot carry.
    fn push_name(&mut self, name: &str) -> Result<()>;

    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn to_strings(&self) -> Vec<String> {
        (0..self.len())
            .filter_map(|i| self.name(i).map(Cow::into_owned))
            .collect()
    }
}
