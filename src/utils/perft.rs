use crate::board::Position;
use crate::board::movegen::AttackTables;

/// Counts the leaf nodes of the legal move tree `depth` plies deep
pub fn perft(tables: &AttackTables, pos: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let move_list = tables.generate_legal_moves(pos);

    if depth == 1 {
        return move_list.len() as u64;
    }

    let mut nodes = 0;

    for &move_ in move_list.iter() {
        let mut next = *pos;
        next.play(move_);
        nodes += perft(tables, &next, depth - 1);
    }

    nodes
}

/// Perft with the node count of every root move printed, plus totals and speed.
/// Returns the total.
pub fn perft_divide(tables: &AttackTables, pos: &Position, depth: usize) -> u64 {
    use std::time::Instant;

    println!("=============== PERFT TEST ===============");
    println!("                 Depth: {depth}           ");
    println!("==========================================");

    let mut total_nodes = 0;

    let start = Instant::now();

    for &move_ in tables.generate_legal_moves(pos).iter() {
        let mut next = *pos;
        next.play(move_);

        let nodes = perft(tables, &next, depth.saturating_sub(1));
        total_nodes += nodes;

        println!("              {move_}: {nodes}");
    }

    let time = start.elapsed().as_millis().max(1);

    println!("=========================================");
    println!("              Nodes: {total_nodes}       ");
    println!("              Time: {time}ms             ");
    println!(
        "              Mnps: {:0.1}Mnps",
        (total_nodes as f64 / time as f64 / 1000.0)
    );
    println!("=========================================");

    total_nodes
}
