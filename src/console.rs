//! Console front end: team listings, prompts and the play-again loop.
//!
//! All reading happens here. The engine only ever sees parsed selections,
//! and a rejected selection simply re-prompts.

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::time::Duration;

use crate::flavour;
use hero_clash::{
    BattleConfig, Catalog, Engagement, GameRng, Matchup, RandomSource, Roster, Side, SideMap, TeamNumber,
    TurnReport,
};

pub struct ConsoleApp<I, O> {
    config: BattleConfig,
    catalog: Catalog,
    rng: GameRng,
    flavour_rng: GameRng,
    input: I,
    output: O,
}

impl ConsoleApp<StdinLock<'static>, Stdout> {
    /// App reading stdin and writing stdout.
    pub fn stdio(config: BattleConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
            None => Catalog::bundled().context("loading bundled catalog")?,
        };
        Ok(Self::new(config, catalog, io::stdin().lock(), io::stdout()))
    }
}

impl<I: BufRead, O: Write> ConsoleApp<I, O> {
    pub fn new(config: BattleConfig, catalog: Catalog, input: I, output: O) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let flavour_rng = rng.for_context("flavour");
        tracing::info!(seed = rng.seed(), records = catalog.len(), "session started");

        Self {
            config,
            catalog,
            rng,
            flavour_rng,
            input,
            output,
        }
    }

    /// Play battles until the user declines another one.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.play_battle()?;

            let answer = self.prompt(
                "\n[PLAY AGAIN?]\nEnter 'y' if you want to play again. Press 'Enter' to end the game: ",
            )?;
            if !answer.trim().eq_ignore_ascii_case("y") {
                return Ok(());
            }
        }
    }

    fn play_battle(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\n▶️ New Battle:\nWe will start by creating two teams of 5 random characters each...\n"
        )?;

        write!(self.output, "⏳ Loading characters...")?;
        self.output.flush()?;
        let mut rng = self.rng.fork();
        let matchup = Matchup::draw(&mut self.catalog, &mut rng).context("assembling teams")?;
        writeln!(self.output, "\n\n✅ Both teams have been created!")?;
        for number in TeamNumber::ALL {
            self.print_roster(&number.to_string(), matchup.team(number))?;
        }

        let player_team = self.prompt_team()?;
        let line = flavour::pick(&flavour::TEAM_ASSEMBLED, &mut self.flavour_rng);
        writeln!(self.output, "\nYou have selected {player_team}\n{line}")?;

        let labels = SideMap::from_pair(
            format!("{player_team} (you)"),
            format!("{} (cpu)", player_team.other()),
        );
        let mut battle = matchup.start(player_team, rng)?;

        loop {
            let report = match battle.to_move() {
                Side::Player => self.player_turn(&mut battle)?,
                Side::Cpu => {
                    self.prompt(&format!(
                        "\n[ROUND {}. PRESS ENTER TO PLAY YOUR OPPONENT'S TURN...]",
                        battle.round()
                    ))?;
                    battle.play_automated_turn()?
                }
            };

            writeln!(
                self.output,
                "\n***🚀***{} IS ATTACKING***🚀***\n{report}",
                labels[report.side].to_uppercase()
            )?;
            self.pause();
            for side in Side::ALL {
                self.print_roster(&labels[side], battle.roster(side))?;
            }

            if !report.continues() {
                break;
            }
        }

        let (banner, lines) = match battle.outcome().winner() {
            Some(Side::Player) => ("🎉 YOU WIN! 🎉", &flavour::PLAYER_WINS[..]),
            Some(Side::Cpu) => ("🤯 YOU LOSE... 🤯", &flavour::CPU_WINS[..]),
            None => ("🤝 NOBODY WINS 🤝", &[][..]),
        };
        let line = flavour::pick(lines, &mut self.flavour_rng);
        writeln!(self.output, "\n{banner}\n{line}")?;
        Ok(())
    }

    fn prompt_team(&mut self) -> Result<TeamNumber> {
        loop {
            let answer = self.prompt("\n👥 [CHOOSE YOUR TEAM]\nEnter (1) or (2): ")?;
            match answer.parse() {
                Ok(team) => return Ok(team),
                Err(_) => writeln!(self.output, "\n❌ Invalid input. Please enter 1 or 2")?,
            }
        }
    }

    fn player_turn<R: RandomSource>(&mut self, battle: &mut Engagement<R>) -> Result<TurnReport> {
        let choices = battle
            .attacker_choices()
            .iter()
            .enumerate()
            .map(|(i, fighter)| format!("({}) {}", i + 1, fighter.name()))
            .collect::<Vec<_>>()
            .join(", ");
        let question = format!("\n🚀 [ROUND {}. CHOOSE A CHARACTER]\n{choices}: ", battle.round());

        loop {
            let answer = self.prompt(&question)?;
            let attempt =
                Engagement::<R>::parse_selection(&answer).and_then(|index| battle.submit_selection(index));
            match attempt {
                Ok(report) => return Ok(report),
                Err(err) if err.is_recoverable() => writeln!(
                    self.output,
                    "\n❌ Invalid input ({err}). Please enter a valid number corresponding to a character"
                )?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn print_roster(&mut self, label: &str, roster: &Roster) -> Result<()> {
        writeln!(self.output, "\n{label}, {roster}")?;
        for summary in roster.summaries(self.config.show_rolls) {
            writeln!(self.output, "{summary}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line)
    }

    fn pause(&self) {
        if self.config.pause_ms > 0 {
            std::thread::sleep(Duration::from_millis(self.config.pause_ms));
        }
    }
}
