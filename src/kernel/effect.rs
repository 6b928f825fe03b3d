use crate::models::{AnnotationSet, ContainerKey, CustomPalette};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SaveAnnotations {
        key: ContainerKey,
        annotations: AnnotationSet,
    },
    DeleteAnnotations(ContainerKey),
    SavePalette(CustomPalette),
}
