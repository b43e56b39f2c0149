use crate::Float;

/// Compute Delta E for the two colors in Oklab.
///
/// This is the Euclidian distance between the two coordinate triples. Scale
/// generation uses it to measure how far a quantized shade drifted from its
/// Oklch target.
#[inline]
pub(crate) fn delta_e_ok(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [l1, a1, b1] = coordinates1;
    let [l2, a2, b2] = coordinates2;

    let delta_l = l1 - l2;
    let delta_a = a1 - a2;
    let delta_b = b1 - b2;

    delta_l
        .mul_add(delta_l, delta_a.mul_add(delta_a, delta_b * delta_b))
        .sqrt()
}
