//! Size-keyed cache of transform instances.
//!
//! Building a transform means computing its tables; the planner does that
//! once per size and hands out `Arc`-shared, immutable instances afterwards.
//! Failed constructions are returned to the caller and never cached.

use alloc::sync::Arc;

use hashbrown::HashMap;

use crate::error::FftError;
use crate::fft::ComplexFft;
use crate::goertzel::Goertzel;
use crate::hartley::HartleyTransform;
use crate::num::Float;
use crate::rfft::RealFft;

/// Hands out one shared instance per transform kind and size.
///
/// ```
/// use sigxform::FftPlanner;
///
/// let mut planner = FftPlanner::<f32>::new();
/// let a = planner.plan_real_fft(1024)?;
/// let b = planner.plan_real_fft(1024)?;
/// assert!(std::sync::Arc::ptr_eq(&a, &b));
/// # Ok::<(), sigxform::FftError>(())
/// ```
pub struct FftPlanner<T: Float> {
    fft: HashMap<usize, Arc<ComplexFft<T>>>,
    real: HashMap<usize, Arc<RealFft<T>>>,
    hartley: HashMap<usize, Arc<HartleyTransform<T>>>,
    goertzel: HashMap<usize, Arc<Goertzel<T>>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn plan<V>(
    cache: &mut HashMap<usize, Arc<V>>,
    kind: &'static str,
    size: usize,
    build: impl FnOnce(usize) -> Result<V, FftError>,
) -> Result<Arc<V>, FftError> {
    if let Some(hit) = cache.get(&size) {
        #[cfg(feature = "verbose-logging")]
        log::trace!("planner: reusing {kind} of size {size}");
        return Ok(Arc::clone(hit));
    }
    let built = Arc::new(build(size)?);
    #[cfg(feature = "verbose-logging")]
    log::debug!("planner: built {kind} of size {size}");
    #[cfg(not(feature = "verbose-logging"))]
    let _ = kind;
    cache.insert(size, Arc::clone(&built));
    Ok(built)
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            fft: HashMap::new(),
            real: HashMap::new(),
            hartley: HashMap::new(),
            goertzel: HashMap::new(),
        }
    }

    pub fn plan_fft(&mut self, size: usize) -> Result<Arc<ComplexFft<T>>, FftError> {
        plan(&mut self.fft, "complex fft", size, ComplexFft::new)
    }

    pub fn plan_real_fft(&mut self, size: usize) -> Result<Arc<RealFft<T>>, FftError> {
        plan(&mut self.real, "real fft", size, RealFft::new)
    }

    pub fn plan_hartley(&mut self, size: usize) -> Result<Arc<HartleyTransform<T>>, FftError> {
        plan(&mut self.hartley, "hartley transform", size, HartleyTransform::new)
    }

    pub fn plan_goertzel(&mut self, size: usize) -> Result<Arc<Goertzel<T>>, FftError> {
        plan(&mut self.goertzel, "goertzel", size, Goertzel::new)
    }

    /// Total number of cached instances across all transform kinds.
    pub fn len(&self) -> usize {
        self.fft.len() + self.real.len() + self.hartley.len() + self.goertzel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached instance. Instances already handed out stay valid.
    pub fn clear(&mut self) {
        self.fft.clear();
        self.real.clear();
        self.hartley.clear();
        self.goertzel.clear();
    }
}
