use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Precomputed source column/row for every destination pixel
pub struct ScaleLut {
    src_x: Vec<usize>,
    src_y: Vec<usize>,
}

impl ScaleLut {
    pub fn empty() -> Self {
        Self {
            src_x: Vec::new(),
            src_y: Vec::new(),
        }
    }

    pub fn dst_size(&self) -> (usize, usize) {
        (self.src_x.len(), self.src_y.len())
    }
}

/// Nearest-neighbour mapping, keeps one-pixel lines crisp on HiDPI surfaces.
pub fn build_scale_lut(dst_w: usize, dst_h: usize, src_w: usize, src_h: usize) -> ScaleLut {
    ScaleLut {
        src_x: nearest_axis(dst_w, src_w),
        src_y: nearest_axis(dst_h, src_h),
    }
}

fn nearest_axis(dst: usize, src: usize) -> Vec<usize> {
    if src == 0 {
        return vec![0; dst];
    }
    let step = src as f32 / dst as f32;
    (0..dst)
        .map(|d| (((d as f32 + 0.5) * step) as usize).min(src - 1))
        .collect()
}

/// Parallel stretch of `src` (row stride `sw`) into `dst` (row stride `dw`).
/// Rows are processed in parallel for cache friendly writes
pub fn blit_nearest(dst: &mut [u32], dw: usize, src: &[u32], sw: usize, lut: &ScaleLut) {
    if dw == 0 {
        return;
    }
    dst.par_chunks_mut(dw).enumerate().for_each(|(y, dst_row)| {
        let Some(&sy) = lut.src_y.get(y) else {
            return;
        };
        let src_row = &src[sy * sw..(sy + 1) * sw];
        for (px, &sx) in dst_row.iter_mut().zip(&lut.src_x) {
            *px = src_row[sx];
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_mapping() {
        let lut = build_scale_lut(4, 2, 4, 2);
        assert_eq!(lut.src_x, vec![0, 1, 2, 3]);
        assert_eq!(lut.src_y, vec![0, 1]);
    }

    #[test]
    fn doubling_repeats_each_pixel() {
        let src = [1, 2, 3, 4];
        let lut = build_scale_lut(4, 4, 2, 2);
        let mut dst = vec![0; 16];
        blit_nearest(&mut dst, 4, &src, 2, &lut);
        assert_eq!(dst, vec![1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]);
    }

    #[test]
    fn halving_samples_within_bounds() {
        let lut = build_scale_lut(2, 1, 5, 3);
        assert_eq!(lut.dst_size(), (2, 1));
        assert!(lut.src_x.iter().all(|&x| x < 5));
        assert!(lut.src_y.iter().all(|&y| y < 3));
    }
}
