//! Procedural pip textures and the die mesh that maps them.
//!
//! The six faces are drawn into one atlas (3x2 grid of cells, one per face
//! value) and the cuboid mesh assigns each face slot the atlas cell of the
//! value it carries, per [`FACE_SLOT_VALUES`]. Keeping the slot assignment
//! in the roller core means the orientation map and the texture layout can
//! never drift apart.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::roller::FACE_SLOT_VALUES;

/// Edge length of a die, in world units.
pub const DIE_SIZE: f32 = 1.5;

const CELL: u32 = 256;
const COLS: u32 = 3;
const ROWS: u32 = 2;

// White face, near-black pips.
const FACE_RGB: [u8; 3] = [255, 255, 255];
const PIP_RGB: [u8; 3] = [26, 26, 26];

fn atlas_cell(value: u8) -> (u32, u32) {
    let i = u32::from(value - 1);
    (i % COLS, i / COLS)
}

/// Pip centers for one face value, in cell-local pixel coordinates.
fn pip_centers(value: u8, size: f32) -> Vec<(f32, f32)> {
    let c = size / 2.0;
    let q = size / 4.0;
    let tq = size * 0.75;

    let mut pips = Vec::new();
    if value % 2 == 1 {
        pips.push((c, c));
    }
    if value > 1 {
        pips.push((q, q));
        pips.push((tq, tq));
    }
    if value > 3 {
        pips.push((tq, q));
        pips.push((q, tq));
    }
    if value == 6 {
        pips.push((q, c));
        pips.push((tq, c));
    }
    pips
}

fn draw_face(rgba: &mut [u8], atlas_width: u32, value: u8) {
    let (col, row) = atlas_cell(value);
    let (x0, y0) = (col * CELL, row * CELL);
    let radius = CELL as f32 / 9.0;
    let pips = pip_centers(value, CELL as f32);

    for py in 0..CELL {
        for px in 0..CELL {
            // Smooth pip edge: coverage falls off over one pixel.
            let mut coverage: f32 = 0.0;
            for &(cx, cy) in &pips {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                coverage = coverage.max((radius - dist + 0.5).clamp(0.0, 1.0));
            }
            let offset = (((y0 + py) * atlas_width + x0 + px) * 4) as usize;
            for ch in 0..3 {
                let face = FACE_RGB[ch] as f32;
                let pip = PIP_RGB[ch] as f32;
                rgba[offset + ch] = (face + (pip - face) * coverage) as u8;
            }
            rgba[offset + 3] = 255;
        }
    }
}

/// Builds the six-face pip atlas as a GPU texture.
pub fn build_pip_atlas() -> Image {
    let width = COLS * CELL;
    let height = ROWS * CELL;
    let mut rgba = vec![0u8; (width * height * 4) as usize];
    for value in 1..=6 {
        draw_face(&mut rgba, width, value);
    }

    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        rgba,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

// Face slot corners in +X, -X, +Y, -Y, +Z, -Z order, CCW from outside.
// Unit positions scaled by the half-extent; normals are the slot axes.
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    [[1., -1., 1.], [1., -1., -1.], [1., 1., -1.], [1., 1., 1.]],
    [[-1., -1., -1.], [-1., -1., 1.], [-1., 1., 1.], [-1., 1., -1.]],
    [[-1., 1., 1.], [1., 1., 1.], [1., 1., -1.], [-1., 1., -1.]],
    [[-1., -1., -1.], [1., -1., -1.], [1., -1., 1.], [-1., -1., 1.]],
    [[-1., -1., 1.], [1., -1., 1.], [1., 1., 1.], [-1., 1., 1.]],
    [[1., -1., -1.], [-1., -1., -1.], [-1., 1., -1.], [1., 1., -1.]],
];

const FACE_NORMALS: [[f32; 3]; 6] = [
    [1., 0., 0.],
    [-1., 0., 0.],
    [0., 1., 0.],
    [0., -1., 0.],
    [0., 0., 1.],
    [0., 0., -1.],
];

/// Builds the die cuboid with per-slot UVs into the pip atlas.
pub fn build_die_mesh(size: f32) -> Mesh {
    let h = size / 2.0;
    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (slot, corners) in FACE_CORNERS.iter().enumerate() {
        let (col, row) = atlas_cell(FACE_SLOT_VALUES[slot]);
        let (u0, v0) = (col as f32 / COLS as f32, row as f32 / ROWS as f32);
        let (u1, v1) = ((col + 1) as f32 / COLS as f32, (row + 1) as f32 / ROWS as f32);

        let base = positions.len() as u32;
        for (i, corner) in corners.iter().enumerate() {
            positions.push([corner[0] * h, corner[1] * h, corner[2] * h]);
            normals.push(FACE_NORMALS[slot]);
            uvs.push(match i {
                0 => [u0, v1],
                1 => [u1, v1],
                2 => [u1, v0],
                _ => [u0, v0],
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}
