use glam::Vec2;

/// The two duplicated image layers whose positions the engine animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
}

impl Channel {
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
        }
    }
}

/// Receives one pixel translation per frame for a channel layer.
pub trait ChannelSink {
    fn translate(&mut self, offset: Vec2);
}

impl<F: FnMut(Vec2)> ChannelSink for F {
    fn translate(&mut self, offset: Vec2) {
        self(offset)
    }
}
