use engine::{Category, spend_chart};

mod settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "bilancio={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let mut food = Category::new("food");
    let mut tobaco = Category::new("tobaco");
    let mut coche = Category::new("coche");
    let mut dentista = Category::new("dentista");

    tobaco.deposit("100".parse()?, "deposito")?;
    tobaco.withdraw("5.40".parse()?, "marlboro 23/10")?;
    tobaco.withdraw("5.25".parse()?, "Camel 22/10")?;
    tobaco.withdraw("5.40".parse()?, "marlboro 21/10")?;
    tobaco.withdraw("5.25".parse()?, "Camel 20/10")?;
    tobaco.withdraw("6.50".parse()?, "marlboro 24 17/10")?;

    food.deposit("1000".parse()?, "deposito")?;
    food.withdraw("250".parse()?, "galletas")?;
    food.withdraw("250".parse()?, "carne")?;

    coche.deposit("2000".parse()?, "deposito")?;
    coche.withdraw("1200".parse()?, "embrague")?;
    coche.withdraw("560".parse()?, "cambio de aceite y filtros")?;

    dentista.deposit("100".parse()?, "deposito")?;
    dentista.withdraw("50".parse()?, "muela")?;

    // Cover the dentist bill from the food budget.
    food.transfer("100".parse()?, &mut dentista)?;

    let categories = vec![food, tobaco, coche, dentista];
    tracing::info!("rendering {} categories", categories.len());

    for category in &categories {
        println!("{category}");
        println!();
    }
    println!("{}", spend_chart(&categories));

    Ok(())
}
