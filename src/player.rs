/// Values the HUD reads every frame.
pub trait PlayerStats {
    fn score(&self) -> i64;
    fn money(&self) -> i64;
    fn health(&self) -> i32;
}

/// The defending player: score, money to build with and base health.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    score: i64,
    money: i64,
    health: i32,
}

impl Player {
    pub fn new(money: i64, health: i32) -> Self {
        Player {
            score: 0,
            money,
            health,
        }
    }

    pub fn add_score(&mut self, points: i64) {
        self.score += points;
    }

    pub fn earn(&mut self, amount: i64) {
        self.money += amount;
    }

    /// A unit reached the base.
    pub fn lose_health(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

impl PlayerStats for Player {
    fn score(&self) -> i64 {
        self.score
    }

    fn money(&self) -> i64 {
        self.money
    }

    fn health(&self) -> i32 {
        self.health
    }
}
