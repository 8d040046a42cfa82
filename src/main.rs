use titan::TitanDBOptions;

fn main() {
    if let Err(reason) = titan::init_logger("log4rs.yaml") {
        println!("{}", reason);
        return;
    }

    let mut options = TitanDBOptions::new();
    options.db_options_mut().create_if_missing = true;

    let db_options = options.db_options();
    log::info!(
        "Titan options: [{}], max_background_jobs={}, create_if_missing={}",
        options,
        db_options.max_background_jobs,
        db_options.create_if_missing
    );
    println!("{}", options);
}
