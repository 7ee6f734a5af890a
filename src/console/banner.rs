use colored::Colorize;
use std::io::{self, Write};

const BANNER: &str = concat!(
    "#######   ###                                  ##                      \n",
    "##         ##                                  ##                      \n",
    "##         ##      #####   ### ###   ######  ######    #####   ## ###  \n",
    "#####      ##     ##   ##   ## ##   ##   ##    ##     ##   ##  ###     \n",
    "##         ##     #######   ## ##   ##   ##    ##     ##   ##  ##      \n",
    "##         ##     ##         ###    ##  ###    ##     ##   ##  ##      \n",
    "#######   ####     #####     ###     ### ##     ###    #####   ##      \n",
    "                                                                       \n",
    " #####     ##                                                          \n",
    "##   ##                                                                \n",
    "##       ####     ### ##                                               \n",
    " #####     ##     ## # ##                                              \n",
    "     ##    ##     ## # ##                                              \n",
    "##   ##    ##     ## # ##                                              \n",
    " #####   ######   ##   ##                                              \n",
    "\n",
    "Welcome to Elevator Simulator, a new and exciting game.\n",
    "Hold on to your seat as you experience the thrill of riding an elevator!\n",
);

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER.yellow().on_black())
}
