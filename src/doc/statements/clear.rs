/*!
# `CLEAR`

## Purpose
Erase the program and all variables.

## Remarks
Direct mode only.

## Example
```text
10 PRINT 1
A = 5
CLEAR
LIST
PRINT A
VARIABLE NOT DEFINED
```

*/
