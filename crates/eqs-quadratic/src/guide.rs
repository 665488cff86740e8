/// Explanation of how the discriminant decides the nature of the roots.
pub const DISCRIMINANT_GUIDE: &str = "\
=== Understanding the Discriminant ===
The discriminant (Δ = b² - 4ac) determines the nature of quadratic equation roots:

• Δ > 0: Two real and distinct roots
• Δ = 0: One real root (repeated)
• Δ < 0: Two complex roots (no real solutions)

This is because the quadratic formula is:
x = (-b ± √(b² - 4ac)) / (2a)
The discriminant determines what's under the square root!";
