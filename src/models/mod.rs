//! 数据模型：颜色、格子边框标注、容器身份、调色板

pub mod annotation;
pub mod color;
pub mod container;
pub mod palette;

pub use annotation::{AnnotationSet, Axis, Direction, DirectionSet, SlotAnnotation};
pub use color::Rgb;
pub use container::{BlockPos, ContainerKey, Facing, PairSide, PairedContainer};
pub use palette::{
    CustomPalette, PaintSource, StandardColor, CUSTOM_PALETTE_LEN, STANDARD_PALETTE,
    STANDARD_PALETTE_LEN,
};
