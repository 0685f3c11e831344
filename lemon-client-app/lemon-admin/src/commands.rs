use std::path::Path;

use anyhow::Result;
use tracing::info;

use lemon_core::domain::{format_price, MenuItem, MenuItemChanges, NewMenuItem};
use lemon_core::repositories::MenuItemRepository;
use lemon_core::services::MenuService;
use lemon_infrastructure::MediaStorage;

use crate::cli::Command;

pub struct Admin {
    pub menu: MenuService<dyn MenuItemRepository>,
    pub media: MediaStorage,
}

impl Admin {
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Migrate => {}
            Command::List => {
                let items = self.menu.list_items().await?;
                if items.is_empty() {
                    println!("No menu items.");
                }
                for item in &items {
                    println!("{:>5}  {:<40} {:>8}", item.id, item.name, format_price(&item.price));
                }
            }
            Command::Show { id } => {
                let item = self.menu.get_item(id).await?;
                self.print_item(&item);
            }
            Command::Add {
                name,
                price,
                description,
                image,
            } => {
                let image = self.upload(image.as_deref()).await?;
                let item = self
                    .menu
                    .add_item(NewMenuItem::new(name, price, description, image)?)
                    .await?;
                println!("Added menu item {}.", item.id);
                self.print_item(&item);
            }
            Command::Update {
                id,
                name,
                price,
                description,
                image,
                clear_image,
            } => {
                let image = match (image, clear_image) {
                    (_, true) => Some(None),
                    (Some(path), false) => Some(self.upload(Some(path.as_path())).await?),
                    (None, false) => None,
                };
                let changes = MenuItemChanges {
                    name,
                    price,
                    description,
                    image,
                };
                let item = self.menu.update_item(id, changes).await?;
                println!("Updated menu item {}.", item.id);
                self.print_item(&item);
            }
            Command::Remove { id } => {
                self.menu.remove_item(id).await?;
                println!("Removed menu item {}.", id);
            }
        }
        Ok(())
    }

    /// Copies the file into media storage. The stored file is left in place
    /// if the item write fails afterwards.
    async fn upload(&self, source: Option<&Path>) -> Result<Option<String>> {
        let Some(source) = source else {
            return Ok(None);
        };
        let stored = self.media.save_from_path(source).await?;
        info!("Stored image {} as {}", source.display(), stored);
        Ok(Some(stored))
    }

    fn print_item(&self, item: &MenuItem) {
        println!("id:          {}", item.id);
        println!("name:        {}", item.name);
        println!("price:       {}", format_price(&item.price));
        println!("description: {}", item.description);
        match &item.image {
            Some(path) => println!("image:       {}", self.media.url(path)),
            None => println!("image:       -"),
        }
    }
}
