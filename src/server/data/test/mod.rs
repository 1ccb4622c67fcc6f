mod bill;
mod team;
mod tournament;
