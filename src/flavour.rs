//! Flavour lines printed when a team is picked and when a battle ends.

use hero_clash::RandomSource;

pub const TEAM_ASSEMBLED: [&str; 20] = [
    "Your heroes crack their knuckles and step forward.",
    "The squad is locked in. No refunds.",
    "Capes on, masks on, game on.",
    "A fine selection. The other side looks nervous.",
    "Somewhere, a dramatic soundtrack starts playing.",
    "Your team huddles up and pretends to have a plan.",
    "The crowd goes wild. Well, some of it.",
    "Five legends, one mission.",
    "Your roster has been registered with the city's insurance office.",
    "Power levels rising. Collateral damage expected.",
    "The team nods at you. They trust you. For now.",
    "Warm-ups are over. Time to throw punches.",
    "Bold choice. Let's see if it pays off.",
    "Your fighters have been briefed. Most of them listened.",
    "The arena lights up as your team walks in.",
    "Destiny called and you picked up.",
    "Team spirit: high. Strategy: pending.",
    "Your heroes strike a pose for the cameras.",
    "The stage is set and your champions are ready.",
    "No turning back now.",
];

pub const PLAYER_WINS: [&str; 5] = [
    "The city is safe. For today.",
    "Your team carries you off the field on their shoulders.",
    "Flawless leadership. Mostly.",
    "The opponents demand a rematch. Let them.",
    "Victory tastes sweet. Enjoy it.",
];

pub const CPU_WINS: [&str; 5] = [
    "Your team limps home to regroup.",
    "The machines win this one.",
    "Even heroes have bad days.",
    "Back to the training grounds.",
    "A tough loss. The rematch starts whenever you're ready.",
];

/// Pick one line at random.
pub fn pick(lines: &[&'static str], rng: &mut impl RandomSource) -> &'static str {
    rng.pick_index(lines.len()).map_or("", |index| lines[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero_clash::GameRng;

    #[test]
    fn test_pick_stays_in_list() {
        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            assert!(TEAM_ASSEMBLED.contains(&pick(&TEAM_ASSEMBLED, &mut rng)));
        }
        assert_eq!(pick(&[], &mut rng), "");
    }
}
