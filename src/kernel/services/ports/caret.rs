use crate::core::Pos;

pub trait CaretHost {
    type Caret;

    /// Caret position in pixels, relative to the content area of its pane.
    fn caret_xy(&self, caret: &Self::Caret) -> Pos;

    /// Screen origin of the content area hosting the caret.
    fn content_origin_on_screen(&self, caret: &Self::Caret) -> Pos;
}

pub fn caret_screen_point<H>(host: &H, caret: &H::Caret) -> Pos
where
    H: CaretHost + ?Sized,
{
    let local = host.caret_xy(caret);
    host.content_origin_on_screen(caret).translate(local.x, local.y)
}
