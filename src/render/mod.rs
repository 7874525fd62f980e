pub(crate) mod cpu;
pub(crate) mod png;
pub(crate) mod wallpaper;
