use lifepulse_core::milestone::milestones;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for milestone in milestones() {
        println!("{:>3} days  {}", milestone.days, milestone.message);
    }
    Ok(())
}
