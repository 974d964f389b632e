use rand::{Rng, SeedableRng, distributions::Uniform, rngs::StdRng};
use rand_distr::{Distribution, Exp};
use thiserror::Error;

use crate::{Event, EventCollection, MAX_PROCESS_ID};

/// A validated exponential rate `k` for execution delays.
///
/// The mean delay between queueing and execution is `1 / k`.
#[derive(Debug, Clone, Copy)]
pub struct Rate {
    k: f64,
    delay: Exp<f64>,
}

/// Error returned for a rate outside `(0, ∞)` or too small to invert.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("rate must be finite and positive with a finite mean delay, got {0}")]
pub struct RateError(pub f64);

impl Rate {
    /// Creates a rate.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is not finite and strictly positive, or if
    /// the mean delay `1 / k` overflows.
    pub fn new(k: f64) -> Result<Self, RateError> {
        if !k.is_finite() || k <= 0.0 || !k.recip().is_finite() {
            return Err(RateError(k));
        }
        let delay = Exp::new(k).map_err(|_| RateError(k))?;
        Ok(Self { k, delay })
    }

    /// Returns `k`.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.k
    }

    /// Returns the mean delay, `1 / k`.
    #[must_use]
    pub fn mean_delay(&self) -> f64 {
        self.k.recip()
    }
}

impl Default for Rate {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(0.1).unwrap()
    }
}

impl PartialEq for Rate {
    fn eq(&self, other: &Self) -> bool {
        self.k == other.k
    }
}

impl TryFrom<f64> for Rate {
    type Error = RateError;

    fn try_from(k: f64) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

/// Configuration for a [`Generator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    rate: Rate,
    queue_time_max: f64,
    max_process_id: u8,
}

/// Errors that can occur when validating a generator config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeneratorConfigError {
    #[error("queue_time_max must be finite and positive, got {0}")]
    QueueTimeMax(f64),

    #[error("max_process_id must be at most {max}, got {0}", max = MAX_PROCESS_ID)]
    MaxProcessId(u8),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rate: Rate::default(),
            queue_time_max: 10.0,
            max_process_id: MAX_PROCESS_ID,
        }
    }
}

impl GeneratorConfig {
    /// Creates a validated config.
    ///
    /// Queue times are drawn from `[0, queue_time_max)` and process ids from
    /// `0..=max_process_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `queue_time_max` is not finite and positive, or if
    /// `max_process_id` exceeds [`MAX_PROCESS_ID`].
    pub fn new(
        rate: Rate,
        queue_time_max: f64,
        max_process_id: u8,
    ) -> Result<Self, GeneratorConfigError> {
        if !queue_time_max.is_finite() || queue_time_max <= 0.0 {
            return Err(GeneratorConfigError::QueueTimeMax(queue_time_max));
        }
        if max_process_id > MAX_PROCESS_ID {
            return Err(GeneratorConfigError::MaxProcessId(max_process_id));
        }
        Ok(Self {
            rate,
            queue_time_max,
            max_process_id,
        })
    }

    /// Replaces the rate.
    #[must_use]
    pub fn with_rate(self, rate: Rate) -> Self {
        Self { rate, ..self }
    }

    /// Returns the execution delay rate.
    #[must_use]
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Returns the exclusive upper bound on queue times.
    #[must_use]
    pub fn queue_time_max(&self) -> f64 {
        self.queue_time_max
    }

    /// Returns the largest process id drawn.
    #[must_use]
    pub fn max_process_id(&self) -> u8 {
        self.max_process_id
    }
}

/// An independent random source bound to one distribution.
///
/// Each channel owns its generator state, so draws on one channel never
/// shift the stream of another.
#[derive(Debug, Clone)]
pub struct Channel<D> {
    rng: StdRng,
    distribution: D,
}

impl<D> Channel<D> {
    /// Creates a channel from a generator and a distribution.
    pub fn new(rng: StdRng, distribution: D) -> Self {
        Self { rng, distribution }
    }

    /// Draws the next value.
    pub fn sample<T>(&mut self) -> T
    where
        D: Distribution<T>,
    {
        self.distribution.sample(&mut self.rng)
    }
}

/// Draws kinetic Monte Carlo events from three independent channels.
///
/// - queue time ~ Uniform(0, `queue_time_max`)
/// - execution time = queue time + Exponential(`k`), equivalently
///   `queue_time − ln(u) / k` with `u` ~ Uniform(0, 1)
/// - process id ~ UniformInt(0, `max_process_id`)
#[derive(Debug, Clone)]
pub struct Generator {
    queue_time: Channel<Uniform<f64>>,
    delay: Channel<Exp<f64>>,
    process_id: Channel<Uniform<u8>>,
}

impl Generator {
    /// Creates a generator whose channels are seeded from system entropy.
    #[must_use]
    pub fn from_entropy(config: &GeneratorConfig) -> Self {
        Self::with_rngs(
            config,
            [
                StdRng::from_entropy(),
                StdRng::from_entropy(),
                StdRng::from_entropy(),
            ],
        )
    }

    /// Creates a reproducible generator.
    ///
    /// Three channel seeds are drawn from a master generator seeded with
    /// `seed`, so equal seeds give equal event streams.
    #[must_use]
    pub fn from_seed(config: &GeneratorConfig, seed: u64) -> Self {
        let mut master = StdRng::seed_from_u64(seed);
        let mut child = || StdRng::seed_from_u64(master.r#gen());
        Self::with_rngs(config, [child(), child(), child()])
    }

    fn with_rngs(config: &GeneratorConfig, rngs: [StdRng; 3]) -> Self {
        let [queue_rng, delay_rng, process_rng] = rngs;
        Self {
            queue_time: Channel::new(queue_rng, Uniform::new(0.0, config.queue_time_max)),
            delay: Channel::new(delay_rng, config.rate.delay),
            process_id: Channel::new(
                process_rng,
                Uniform::new_inclusive(0, config.max_process_id),
            ),
        }
    }

    /// Draws one event.
    pub fn next_event(&mut self) -> Event {
        let queue_time: f64 = self.queue_time.sample();
        let delay: f64 = self.delay.sample();
        let process_id: u8 = self.process_id.sample();
        Event::new(queue_time, queue_time + delay, process_id)
    }

    /// Draws `n` events.
    pub fn generate(&mut self, n: usize) -> EventCollection {
        let mut events = EventCollection::with_capacity(n);
        events.extend(std::iter::repeat_with(|| self.next_event()).take(n));
        events
    }
}

/// Generates `n` events with the default ranges and the given rate.
///
/// Every call seeds fresh channels from system entropy. Use
/// [`Generator::from_seed`] for reproducible streams.
#[must_use]
pub fn generate_events(n: usize, rate: Rate) -> EventCollection {
    let config = GeneratorConfig::default().with_rate(rate);
    Generator::from_entropy(&config).generate(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn seeded(seed: u64) -> Generator {
        Generator::from_seed(&GeneratorConfig::default(), seed)
    }

    #[test]
    fn rate_rejects_out_of_domain_values() {
        for k in [0.0, -0.1, f64::NAN, f64::INFINITY, 1e-310] {
            assert!(Rate::new(k).is_err(), "k = {k} should be rejected");
        }
        assert_relative_eq!(Rate::default().get(), 0.1);
        assert_relative_eq!(Rate::default().mean_delay(), 10.0);
        assert!(Rate::try_from(2.0).is_ok());
    }

    #[test]
    fn config_rejects_bad_queue_time_max() {
        let rate = Rate::default();
        assert!(GeneratorConfig::new(rate, 0.0, 12).is_err());
        assert!(GeneratorConfig::new(rate, f64::INFINITY, 12).is_err());
        assert!(GeneratorConfig::new(rate, 5.0, 3).is_ok());
    }

    #[test]
    fn config_rejects_process_ids_above_max() {
        let rate = Rate::default();
        assert_eq!(
            GeneratorConfig::new(rate, 10.0, 200),
            Err(GeneratorConfigError::MaxProcessId(200))
        );
        assert_eq!(
            GeneratorConfig::new(rate, 10.0, MAX_PROCESS_ID + 1),
            Err(GeneratorConfigError::MaxProcessId(MAX_PROCESS_ID + 1))
        );

        let config = GeneratorConfig::new(rate, 10.0, MAX_PROCESS_ID).unwrap();
        let events = Generator::from_seed(&config, 1).generate(1_000);
        assert!(events.iter().all(|e| e.process_id() <= MAX_PROCESS_ID));
    }

    #[test]
    fn smallest_accepted_rate_keeps_delays_finite() {
        let rate = Rate::new(1e-300).unwrap();
        assert!(rate.mean_delay().is_finite());

        let config = GeneratorConfig::default().with_rate(rate);
        let events = Generator::from_seed(&config, 4).generate(100);
        assert!(events.iter().all(|e| e.execution_time().is_finite()));
    }

    #[test]
    fn fields_stay_in_range() {
        let events = seeded(7).generate(5_000);
        assert_eq!(events.len(), 5_000);

        for event in &events {
            assert!((0.0..10.0).contains(&event.queue_time()));
            assert!(event.execution_time() >= event.queue_time());
            assert!(event.execution_time().is_finite());
            assert!(event.process_id() <= MAX_PROCESS_ID);
        }
    }

    #[test]
    fn equal_seeds_reproduce_streams() {
        assert_eq!(seeded(42).generate(50), seeded(42).generate(50));
        assert_ne!(seeded(42).generate(50), seeded(43).generate(50));
    }

    #[test]
    fn zero_events_is_empty() {
        assert!(seeded(1).generate(0).is_empty());
        assert!(generate_events(0, Rate::default()).is_empty());
    }

    #[test]
    fn sample_moments_match_distributions() {
        let n = 20_000;
        let events = seeded(2015).generate(n);

        let mean = |f: fn(&Event) -> f64| events.iter().map(f).sum::<f64>() / n as f64;
        let queue_mean = mean(Event::queue_time);
        let delay_mean = mean(|e| e.execution_time() - e.queue_time());

        assert_relative_eq!(queue_mean, 5.0, max_relative = 0.05);
        assert_relative_eq!(delay_mean, 10.0, max_relative = 0.05);

        let mut seen = [false; MAX_PROCESS_ID as usize + 1];
        for event in &events {
            seen[usize::from(event.process_id())] = true;
        }
        assert!(seen.iter().all(|&s| s), "every process id should be drawn");
    }

    #[test]
    fn custom_ranges_are_respected() {
        let config = GeneratorConfig::new(Rate::new(2.0).expect("valid rate"), 1.0, 0)
            .expect("valid config");
        let events = Generator::from_seed(&config, 9).generate(1_000);

        for event in &events {
            assert!(event.queue_time() < 1.0);
            assert_eq!(event.process_id(), 0);
        }
    }

    #[test]
    fn channels_draw_independently() {
        let mut a = Channel::new(StdRng::seed_from_u64(5), Uniform::new(0.0, 1.0));
        let mut b = Channel::new(StdRng::seed_from_u64(5), Uniform::new(0.0, 1.0));
        let mut other = Channel::new(StdRng::seed_from_u64(6), Uniform::new(0.0, 1.0));

        // Drawing from `other` does not move `b`'s stream.
        for _ in 0..10 {
            let _: f64 = other.sample();
        }
        for _ in 0..10 {
            let x: f64 = a.sample();
            let y: f64 = b.sample();
            assert_eq!(x, y);
        }
    }
}
