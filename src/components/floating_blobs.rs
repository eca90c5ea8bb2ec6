use yew::prelude::*;

/// One looping decorative shape: which CSS class draws it, which keyframes
/// move it and how long each loop lasts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSpec {
    pub class: &'static str,
    pub keyframes: &'static str,
    pub duration_secs: f32,
    pub delay_secs: f32,
}

impl MotionSpec {
    pub fn animation(&self) -> String {
        format!(
            "{} {}s ease-in-out {}s infinite",
            self.keyframes, self.duration_secs, self.delay_secs
        )
    }

    fn style(&self) -> String {
        format!("animation: {};", self.animation())
    }
}

pub const BLOBS: [MotionSpec; 3] = [
    MotionSpec { class: "blob blob-teal", keyframes: "blob-drift-a", duration_secs: 8.0, delay_secs: 0.0 },
    MotionSpec { class: "blob blob-brand", keyframes: "blob-drift-b", duration_secs: 10.0, delay_secs: 1.0 },
    MotionSpec { class: "blob blob-sage", keyframes: "blob-drift-c", duration_secs: 12.0, delay_secs: 2.0 },
];

pub const PARTICLES: [MotionSpec; 3] = [
    MotionSpec { class: "particle particle-teal", keyframes: "particle-float-a", duration_secs: 4.0, delay_secs: 0.0 },
    MotionSpec { class: "particle particle-brand", keyframes: "particle-float-b", duration_secs: 5.0, delay_secs: 1.0 },
    MotionSpec { class: "particle particle-sage", keyframes: "particle-float-c", duration_secs: 6.0, delay_secs: 2.0 },
];

fn shape(spec: &MotionSpec) -> Html {
    html! { <div class={spec.class} style={spec.style()}></div> }
}

#[function_component(FloatingBlobs)]
pub fn floating_blobs() -> Html {
    html! {
        <div class="floating-blobs" aria-hidden="true">
            { for BLOBS.iter().map(shape) }
            <div class="particles">
                { for PARTICLES.iter().map(shape) }
            </div>
            <style>
                {r#"
                .floating-blobs {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                }
                .blob {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                    mix-blend-mode: multiply;
                }
                .blob-teal {
                    top: -6rem;
                    right: -6rem;
                    width: 500px;
                    height: 500px;
                    background: rgba(204, 251, 241, 0.4);
                }
                .blob-brand {
                    top: 20%;
                    left: -6rem;
                    width: 400px;
                    height: 400px;
                    background: rgba(219, 234, 254, 0.4);
                }
                .blob-sage {
                    bottom: -8rem;
                    right: 10%;
                    width: 600px;
                    height: 600px;
                    background: rgba(226, 236, 223, 0.5);
                }
                .particles {
                    position: absolute;
                    inset: 0;
                    opacity: 0.3;
                }
                .particle {
                    position: absolute;
                    border-radius: 9999px;
                }
                .particle-teal {
                    top: 15%;
                    left: 15%;
                    width: 1rem;
                    height: 1rem;
                    background: var(--teal-400);
                }
                .particle-brand {
                    top: 40%;
                    right: 20%;
                    width: 0.75rem;
                    height: 0.75rem;
                    background: var(--brand-400);
                }
                .particle-sage {
                    bottom: 20%;
                    left: 30%;
                    width: 1.5rem;
                    height: 1.5rem;
                    background: var(--sage-400);
                }
                @keyframes blob-drift-a {
                    0%, 100% { transform: translate(0, 0) scale(1); }
                    50% { transform: translate(20px, -30px) scale(1.1); }
                }
                @keyframes blob-drift-b {
                    0%, 100% { transform: translate(0, 0) scale(1); }
                    50% { transform: translate(30px, 50px) scale(1.2); }
                }
                @keyframes blob-drift-c {
                    0%, 100% { transform: translate(0, 0) scale(1); }
                    50% { transform: translate(-40px, 20px) scale(1.1); }
                }
                @keyframes particle-float-a {
                    0%, 100% { transform: translateY(0); opacity: 0.5; }
                    50% { transform: translateY(-20px); opacity: 1; }
                }
                @keyframes particle-float-b {
                    0%, 100% { transform: translateY(0); opacity: 0.3; }
                    50% { transform: translateY(-30px); opacity: 0.8; }
                }
                @keyframes particle-float-c {
                    0%, 100% { transform: translateY(0); opacity: 0.4; }
                    50% { transform: translateY(-25px); opacity: 0.9; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .blob, .particle { animation: none !important; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn animation_shorthand_loops_forever() {
        assert_eq!(BLOBS[1].animation(), "blob-drift-b 10s ease-in-out 1s infinite");
        assert_eq!(PARTICLES[0].animation(), "particle-float-a 4s ease-in-out 0s infinite");
    }

    #[test]
    fn every_shape_has_positive_duration_and_own_keyframes() {
        let specs: Vec<_> = BLOBS.iter().chain(PARTICLES.iter()).collect();
        for spec in &specs {
            assert!(spec.duration_secs > 0.0);
            assert!(spec.delay_secs >= 0.0);
        }
        let names: HashSet<_> = specs.iter().map(|s| s.keyframes).collect();
        assert_eq!(names.len(), specs.len());
    }
}
