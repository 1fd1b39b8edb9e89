use gazette::{Author, Catalog};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Gazette v{}", gazette::version());
    println!("==========================================");
    println!();

    let mut catalog = Catalog::new();

    let carry = catalog.create_author("Carry Bradshaw")?;
    let nathaniel = catalog.create_author("Nathaniel Hawthorne")?;
    println!("✓ Created authors: Carry Bradshaw, Nathaniel Hawthorne");

    let vogue = catalog.create_magazine("Vogue", "Fashion")?;
    let ad = catalog.create_magazine("AD", "Architecture")?;
    println!("✓ Created magazines: Vogue (Fashion), AD (Architecture)");

    catalog.add_article(carry, vogue, "How to wear a tutu with style")?;
    catalog.add_article(carry, vogue, "Dating life in NYC")?;
    catalog.add_article(carry, vogue, "Manolo Blahniks and me")?;
    catalog.add_article(carry, ad, "2023 Eccentric Design Trends")?;
    catalog.add_article(nathaniel, vogue, "How to be single and happy")?;
    println!("✓ Registered {} articles", catalog.article_count());

    if let Err(e) = catalog.add_article(nathaniel, ad, "Tiny") {
        println!("✗ Rejected article: {}", e);
    }

    println!("\nCarry Bradshaw:");
    for article in catalog.author_articles(carry) {
        println!("  - {}", article.title());
    }
    println!("  Topic areas: {:?}", catalog.topic_areas(carry));

    println!("\nVogue:");
    println!("  Titles: {:?}", catalog.article_titles(vogue));
    let contributors: Vec<_> = catalog
        .contributors(vogue)
        .into_iter()
        .map(Author::name)
        .collect();
    println!("  Contributors: {:?}", contributors);
    let regulars: Vec<_> = catalog
        .contributing_authors(vogue)
        .into_iter()
        .map(Author::name)
        .collect();
    println!("  Contributing authors: {:?}", regulars);

    if let Some(top) = catalog.top_publisher() {
        println!("\nTop publisher: {} ({})", top.name(), top.category());
    }

    let stats = catalog.statistics();
    println!("\nCatalog Statistics:");
    println!("  Authors: {}", stats.author_count);
    println!("  Magazines: {}", stats.magazine_count);
    println!("  Articles: {}", stats.article_count);

    Ok(())
}
