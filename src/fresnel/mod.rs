use nalgebra::Vector3;

/// Schlick's `(1 - cos_theta)^5` weight, with the base clamped to [0, 1].
pub fn schlick_weight(cos_theta: f64) -> f64 {
    let m = (1.0 - cos_theta).clamp(0.0, 1.0);
    (m * m) * (m * m) * m
}

pub fn fresnel_dielectric(cos_theta_i: f64, eta_i: f64, eta_t: f64) -> f64 {
    let mut eta_i = eta_i;
    let mut eta_t = eta_t;
    let mut cos_theta_i = cos_theta_i.clamp(-1.0, 1.0);

    // A negative cosine means the ray leaves the medium, so the indices swap.
    if cos_theta_i <= 0.0 {
        std::mem::swap(&mut eta_i, &mut eta_t);
        cos_theta_i = cos_theta_i.abs();
    }

    let sin_theta_i = (1.0 - cos_theta_i * cos_theta_i).max(0.0).sqrt();
    let sin_theta_t = eta_i / eta_t * sin_theta_i;

    // Total internal reflection
    if sin_theta_t >= 1.0 {
        return 1.0;
    }

    let cos_theta_t = (1.0 - sin_theta_t * sin_theta_t).max(0.0).sqrt();

    let rpar_l = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
        / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
    let rper_n = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
        / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));

    (rpar_l * rpar_l + rper_n * rper_n) / 2.0
}

/// Unpolarized reflectance off a conductor with complex index of refraction
/// `eta_t + i*k`, evaluated per channel. Conductors are opaque, so only the
/// magnitude of the incident cosine matters.
pub fn fresnel_conductor(
    cos_theta_i: f64,
    eta_i: Vector3<f64>,
    eta_t: Vector3<f64>,
    k: Vector3<f64>,
) -> Vector3<f64> {
    let cos_theta_i = cos_theta_i.clamp(-1.0, 1.0).abs();

    let eta = eta_t.component_div(&eta_i);
    let eta_k = k.component_div(&eta_i);

    let cos_2_theta = cos_theta_i * cos_theta_i;
    let sin_2_theta = 1.0 - cos_2_theta;
    let eta_2 = eta.component_mul(&eta);
    let eta_k_2 = eta_k.component_mul(&eta_k);

    let t0 = eta_2 - eta_k_2 - Vector3::repeat(sin_2_theta);
    let a_2_plus_b_2 = (t0.component_mul(&t0) + 4.0 * eta_2.component_mul(&eta_k_2))
        .map(|x| x.max(0.0).sqrt());
    let t1 = a_2_plus_b_2 + Vector3::repeat(cos_2_theta);
    let a = ((a_2_plus_b_2 + t0) * 0.5).map(|x| x.max(0.0).sqrt());
    let t2 = 2.0 * cos_theta_i * a;
    let r_s = (t1 - t2).component_div(&(t1 + t2));

    let t3 = cos_2_theta * a_2_plus_b_2 + Vector3::repeat(sin_2_theta * sin_2_theta);
    let t4 = t2 * sin_2_theta;
    let r_p = r_s.component_mul(&(t3 - t4).component_div(&(t3 + t4)));

    (r_p + r_s) * 0.5
}

pub trait FresnelTrait {
    fn evaluate(&self, cos_theta_i: f64) -> Vector3<f64>;
}

#[derive(Debug, Clone, Copy)]
pub enum Fresnel {
    Schlick(FresnelSchlick),
    GeneralizedSchlick(FresnelGeneralizedSchlick),
    Dielectric(FresnelDielectric),
    Conductor(FresnelConductor),
    Noop(FresnelNoop),
}

impl FresnelTrait for Fresnel {
    fn evaluate(&self, cos_theta_i: f64) -> Vector3<f64> {
        match self {
            Fresnel::Schlick(x) => x.evaluate(cos_theta_i),
            Fresnel::GeneralizedSchlick(x) => x.evaluate(cos_theta_i),
            Fresnel::Dielectric(x) => x.evaluate(cos_theta_i),
            Fresnel::Conductor(x) => x.evaluate(cos_theta_i),
            Fresnel::Noop(x) => x.evaluate(cos_theta_i),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FresnelSchlick {
    f0: Vector3<f64>,
}

impl FresnelSchlick {
    pub fn new(f0: Vector3<f64>) -> Self {
        FresnelSchlick { f0 }
    }
}

impl FresnelTrait for FresnelSchlick {
    fn evaluate(&self, cos_theta_i: f64) -> Vector3<f64> {
        let weight = schlick_weight(cos_theta_i);
        self.f0 + (Vector3::repeat(1.0) - self.f0) * weight
    }
}

/// Schlick generalized to an arbitrary grazing reflectance and falloff
/// exponent; `f90 = 1, exponent = 5` recovers the plain approximation.
#[derive(Debug, Clone, Copy)]
pub struct FresnelGeneralizedSchlick {
    f0: Vector3<f64>,
    f90: Vector3<f64>,
    exponent: f64,
}

impl FresnelGeneralizedSchlick {
    pub fn new(f0: Vector3<f64>, f90: Vector3<f64>, exponent: f64) -> Self {
        FresnelGeneralizedSchlick { f0, f90, exponent }
    }
}

impl FresnelTrait for FresnelGeneralizedSchlick {
    fn evaluate(&self, cos_theta_i: f64) -> Vector3<f64> {
        let weight = (1.0 - cos_theta_i).clamp(0.0, 1.0).powf(self.exponent);
        self.f0 + (self.f90 - self.f0) * weight
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FresnelDielectric {
    eta_i: f64,
    eta_t: f64,
}

impl FresnelDielectric {
    pub fn new(eta_i: f64, eta_t: f64) -> Self {
        FresnelDielectric { eta_i, eta_t }
    }
}

impl FresnelTrait for FresnelDielectric {
    fn evaluate(&self, cos_theta_i: f64) -> Vector3<f64> {
        Vector3::repeat(fresnel_dielectric(cos_theta_i, self.eta_i, self.eta_t))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FresnelConductor {
    eta_i: Vector3<f64>,
    eta_t: Vector3<f64>,
    k: Vector3<f64>,
}

impl FresnelConductor {
    pub fn new(eta_i: Vector3<f64>, eta_t: Vector3<f64>, k: Vector3<f64>) -> Self {
        FresnelConductor { eta_i, eta_t, k }
    }
}

impl FresnelTrait for FresnelConductor {
    fn evaluate(&self, cos_theta_i: f64) -> Vector3<f64> {
        fresnel_conductor(cos_theta_i, self.eta_i, self.eta_t, self.k)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FresnelNoop {}

impl FresnelNoop {
    pub fn new() -> Self {
        FresnelNoop {}
    }
}

impl Default for FresnelNoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FresnelTrait for FresnelNoop {
    fn evaluate(&self, _cos_theta_i: f64) -> Vector3<f64> {
        Vector3::repeat(1.0)
    }
}
