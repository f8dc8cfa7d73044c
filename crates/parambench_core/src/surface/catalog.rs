//! In-process surface catalog and instantiation.

use crate::model::attribute::AttributeSpec;
use crate::model::value::{Rgba, ValueKind, Vector4};
use crate::surface::descriptor::{DescriptorError, SurfaceDescriptor};
use crate::surface::parameter_surface::ParameterSurface;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog registration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    InvalidDescriptor(DescriptorError),
    DuplicateSurface(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDescriptor(source) => write!(f, "surface descriptor is invalid: {source}"),
            Self::DuplicateSurface(name) => {
                write!(f, "surface name already registered: {name}")
            }
        }
    }
}

impl Error for CatalogError {}

/// Registry of surface declarations keyed by stable name.
#[derive(Default)]
pub struct SurfaceCatalog {
    surfaces: BTreeMap<String, SurfaceDescriptor>,
}

impl SurfaceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog preloaded with the builtin surface roster.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for descriptor in builtin_descriptors() {
            catalog
                .register(descriptor)
                .expect("builtin surface descriptors are valid");
        }
        catalog
    }

    /// Registers one surface declaration.
    pub fn register(&mut self, descriptor: SurfaceDescriptor) -> Result<(), CatalogError> {
        descriptor
            .validate()
            .map_err(CatalogError::InvalidDescriptor)?;
        let name = descriptor.name.trim().to_string();
        if self.surfaces.contains_key(name.as_str()) {
            return Err(CatalogError::DuplicateSurface(name));
        }

        self.surfaces.insert(name, descriptor);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Returns sorted surface names.
    pub fn surface_names(&self) -> Vec<String> {
        self.surfaces.keys().cloned().collect()
    }

    /// Returns one registered declaration by name.
    pub fn get(&self, name: &str) -> Option<&SurfaceDescriptor> {
        self.surfaces.get(name.trim())
    }

    /// Instantiates a live surface from one registered declaration.
    ///
    /// Returns `None` when no surface with that name is registered.
    pub fn instantiate(&self, name: &str) -> Option<ParameterSurface> {
        let descriptor = self.get(name)?;
        ParameterSurface::new(descriptor).ok()
    }
}

fn with_output_slot(mut attributes: Vec<AttributeSpec>) -> Vec<AttributeSpec> {
    attributes.push(AttributeSpec::read_only(
        "output_image",
        "Output Image",
        ValueKind::Image,
    ));
    attributes
}

fn builtin_descriptors() -> Vec<SurfaceDescriptor> {
    vec![
        SurfaceDescriptor::new(
            "gaussian_blur",
            "Gaussian Blur",
            with_output_slot(vec![
                AttributeSpec::image("input_image", "Input Image"),
                AttributeSpec::number("radius", "Radius", 10.0)
                    .with_description("How many pixels feed each blurred pixel.")
                    .with_slider(0.0, 100.0),
            ]),
        ),
        SurfaceDescriptor::new(
            "box_blur",
            "Box Blur",
            with_output_slot(vec![
                AttributeSpec::image("input_image", "Input Image"),
                AttributeSpec::number("radius", "Radius", 10.0).with_slider(1.0, 100.0),
            ]),
        ),
        SurfaceDescriptor::new(
            "sepia_tone",
            "Sepia Tone",
            with_output_slot(vec![
                AttributeSpec::image("input_image", "Input Image"),
                AttributeSpec::number("intensity", "Intensity", 1.0)
                    .with_description("Strength of the sepia effect.")
                    .with_slider(0.0, 1.0),
            ]),
        ),
        SurfaceDescriptor::new(
            "vignette",
            "Vignette",
            with_output_slot(vec![
                AttributeSpec::image("input_image", "Input Image"),
                AttributeSpec::number("intensity", "Intensity", 0.0)
                    .with_description("Strength of the edge darkening.")
                    .with_slider(-1.0, 1.0),
                AttributeSpec::number("radius", "Radius", 1.0).with_slider(0.0, 2.0),
            ]),
        ),
        SurfaceDescriptor::new(
            "bump_distortion",
            "Bump Distortion",
            with_output_slot(vec![
                AttributeSpec::image("input_image", "Input Image"),
                AttributeSpec::vector("center", "Center", Vector4::point(150.0, 150.0))
                    .with_description("Center of the effect in pixel coordinates."),
                AttributeSpec::number("radius", "Radius", 300.0).with_slider(0.0, 600.0),
                AttributeSpec::number("scale", "Scale", 0.5)
                    .with_description("Curvature of the bump; negative values dent inward.")
                    .with_slider(-1.0, 1.0),
            ]),
        ),
        SurfaceDescriptor::new(
            "multiply_blend",
            "Multiply Blend",
            with_output_slot(vec![
                AttributeSpec::image("input_image", "Input Image"),
                AttributeSpec::image("background_image", "Background Image"),
            ]),
        ),
        SurfaceDescriptor::new(
            "linear_gradient",
            "Linear Gradient",
            with_output_slot(vec![
                AttributeSpec::vector("point0", "Point 0", Vector4::point(0.0, 0.0))
                    .with_description("Starting position of the gradient."),
                AttributeSpec::vector("point1", "Point 1", Vector4::point(200.0, 200.0))
                    .with_description("Ending position of the gradient."),
                AttributeSpec::color("color0", "Color 0", Rgba::opaque(1.0, 1.0, 1.0)),
                AttributeSpec::color("color1", "Color 1", Rgba::opaque(0.0, 0.0, 0.0)),
            ]),
        ),
    ]
}
