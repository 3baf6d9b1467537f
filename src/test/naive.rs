use crate::SimError;
use crate::model::{ChunkId, Cluster, SEED_SERVER, ServerId};
use crate::sim::{Simulation, Tick};
use crate::strategy::{Algorithm, NaiveStrategy, TransferStrategy};

#[test]
fn naive_schedule_round_robins_targets_then_advances_chunk() {
    let got: Vec<_> = (0..7)
        .map(|t| NaiveStrategy::schedule(Tick(t), 4).expect("valid"))
        .collect();
    assert_eq!(
        got,
        vec![
            (ServerId(1), ChunkId(0)),
            (ServerId(2), ChunkId(0)),
            (ServerId(3), ChunkId(0)),
            (ServerId(1), ChunkId(1)),
            (ServerId(2), ChunkId(1)),
            (ServerId(3), ChunkId(1)),
            (ServerId(1), ChunkId(2)),
        ]
    );
    assert_eq!(NaiveStrategy::schedule(Tick(0), 1), None);
    assert_eq!(NaiveStrategy::schedule(Tick(0), 0), None);
}

#[test]
fn naive_only_seed_transmits() {
    let mut c = Cluster::new(3, 2);
    let mut s = NaiveStrategy;
    s.select(Tick(0), &mut c).expect("select");

    assert_eq!(c.tick_transfers().len(), 1);
    let t = c.tick_transfers()[0];
    assert_eq!((t.from, t.to, t.chunk), (SEED_SERVER, ServerId(1), ChunkId(0)));
    assert_eq!(c.tx().transmitting_to(SEED_SERVER), Some(ServerId(1)));
    assert_eq!(c.tx().active(), 1);
}

#[test]
fn naive_does_nothing_once_all_chunks_were_sent() {
    let mut c = Cluster::new(3, 2);
    let mut s = NaiveStrategy;
    // tick 4: chunk_id = 4 / 2 = 2 >= num_chunks
    s.select(Tick(4), &mut c).expect("select");
    assert!(c.tick_transfers().is_empty());
    assert_eq!(c.tx().active(), 0);
}

#[test]
fn naive_rejects_single_server_cluster() {
    let mut c = Cluster::new(1, 16);
    let err = NaiveStrategy.select(Tick(0), &mut c).expect_err("should fail");
    assert!(matches!(err, SimError::InvalidServerCount { num_servers: 1 }));
}

#[test]
fn naive_run_takes_exactly_peers_times_chunks_ticks() {
    let mut sim = Simulation::with_servers(5).expect("sim");
    assert_eq!(sim.run(Algorithm::Naive).expect("run"), 64);
    assert!(sim.is_complete());
    assert_eq!(sim.total_transfers(), 64);

    for n in 2..=9 {
        let mut sim = Simulation::with_servers(n).expect("sim");
        let ticks = sim.run(Algorithm::Naive).expect("run");
        assert_eq!(ticks, (n as u64 - 1) * 16, "n={n}");
        assert_eq!(ticks, sim.config().naive_bound());
    }
}

#[test]
fn naive_on_two_servers_takes_one_tick_per_chunk() {
    let mut sim = Simulation::with_servers(2).expect("sim");
    assert_eq!(sim.run(Algorithm::Naive).expect("run"), 16);
}
