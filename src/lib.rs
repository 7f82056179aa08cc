//! Local-search metaheuristics for the 0/1 knapsack problem.
//!
//! Two independent single-solution trajectory heuristics built on a shared
//! move kernel:
//!
//! - **Simulated Annealing (SA)**: temperature-scheduled acceptance of
//!   neighbors, including worsening moves under the Metropolis criterion,
//!   with geometric cooling.
//! - **Iterated Local Search (ILS)**: repeated perturb → hill-climb →
//!   accept-if-better cycles around the best solution found so far.
//!
//! Both engines share the solution representation and objective evaluator
//! ([`model`]), the randomized-greedy initial solution, the
//! feasibility-preserving bit-flip neighbor, and the k-bit perturbation
//! ([`ops`]), as well as the fixed-budget hill climb ([`ls`]) that ILS uses
//! as its improvement step.
//!
//! # Feasibility
//!
//! Every solution handed out by the kernel or the engines respects the
//! knapsack capacity. Infeasible candidates are silently discarded during
//! move generation and never replace a tracked current/best solution.
//!
//! # Randomness
//!
//! All randomness is drawn from an explicitly threaded `rand::Rng`. Each
//! engine offers `run` (seeds its own RNG from the config) and
//! `run_with_rng` (caller-supplied RNG for deterministic runs).

pub mod ils;
pub mod ls;
pub mod model;
pub mod ops;
pub mod report;
pub mod sa;
