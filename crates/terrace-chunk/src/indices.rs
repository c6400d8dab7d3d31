//! Shared triangle index table for the chunk vertex grid.
//!
//! Every chunk has the same topology, so the table is built once per process
//! and handed out as a read-only slice. Cells alternate their diagonal in a
//! herringbone pattern so that the surface has no directional bias.

use std::sync::LazyLock;

use crate::chunk::VERTICES_PER_EDGE;

const CELLS_PER_EDGE: usize = VERTICES_PER_EDGE - 1;

/// Triangles per chunk: two per grid cell.
pub const TRIANGLE_COUNT: usize = CELLS_PER_EDGE * CELLS_PER_EDGE * 2;

/// Indices per chunk.
pub const INDEX_COUNT: usize = TRIANGLE_COUNT * 3;

static CHUNK_INDICES: LazyLock<[u16; INDEX_COUNT]> = LazyLock::new(build_indices);

/// The triangle list shared by all chunks, counter-clockwise when viewed from above.
///
/// Cell `(x, z)` owns indices `[(x + z * 7) * 6, +6)`: two triangles of three indices.
pub fn chunk_indices() -> &'static [u16; INDEX_COUNT] {
    &CHUNK_INDICES
}

fn build_indices() -> [u16; INDEX_COUNT] {
    let mut indices = [0_u16; INDEX_COUNT];
    let mut cursor = 0;
    let stride = VERTICES_PER_EDGE as u16;

    for z in 0..CELLS_PER_EDGE as u16 {
        let mut slant_left = z % 2 == 0;

        for x in 0..CELLS_PER_EDGE as u16 {
            let bottom_left = x + z * stride;
            let bottom_right = bottom_left + 1;
            let top_left = x + (z + 1) * stride;
            let top_right = top_left + 1;

            let cell = if slant_left {
                [
                    top_left,
                    bottom_left,
                    bottom_right,
                    top_left,
                    bottom_right,
                    top_right,
                ]
            } else {
                [
                    top_left,
                    bottom_left,
                    top_right,
                    bottom_left,
                    bottom_right,
                    top_right,
                ]
            };
            indices[cursor..cursor + 6].copy_from_slice(&cell);
            cursor += 6;

            slant_left = !slant_left;
        }
    }

    indices
}
